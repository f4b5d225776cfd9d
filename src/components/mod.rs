mod alert;
pub use alert::{InvalidAlert, INVALID_MESSAGE};

mod favnum;
pub use favnum::{FavNum, FavNumField, FIELD_ID};

mod numberinput;
pub use numberinput::NumberInput;
