//! Cell-centred fields and global reductions for foamke

mod error;
mod reduce;
mod vol_field;

pub use error::FieldError;
pub use reduce::{DomainSum, GlobalReduce, SerialSum};
pub use vol_field::{VolField, VolScalarField, VolVectorField};
