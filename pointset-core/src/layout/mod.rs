mod attribute_key;
pub use self::attribute_key::*;

mod data_type;
pub use self::data_type::*;
