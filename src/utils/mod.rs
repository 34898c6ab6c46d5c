//! Miscellaneous components used in the library.

mod arg_set;
pub use arg_set::ArgSet;

mod grounded_extension_computer;
pub use grounded_extension_computer::grounded_extension;
pub use grounded_extension_computer::grounded_labelling;

mod labelling;
pub use labelling::Label;
pub use labelling::Labelling;
