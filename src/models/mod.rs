pub mod brightness;
pub mod bulb;
pub mod color;
pub mod group;
pub mod keys;
pub mod record;
