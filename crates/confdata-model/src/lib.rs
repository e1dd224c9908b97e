mod error;
pub use error::{ModelError, ModelResult};

mod kind;
pub use kind::{Conversion, DataType};

mod value;
pub use value::NativeValue;
