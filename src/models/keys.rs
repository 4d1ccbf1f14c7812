//! Gateway resource keys used in group and bulb records.

pub const ON_OFF: &str = "5850";
pub const BRIGHTNESS: &str = "5851";
pub const COLOR_HEX: &str = "5706";
pub const NAME: &str = "9001";
pub const INSTANCE_ID: &str = "9003";
pub const LIGHT_CONTROL: &str = "3311";
