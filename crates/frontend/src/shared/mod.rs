pub mod icons;
pub mod nav;
pub mod storage;
