//! OpenFOAM ASCII case I/O for foamke
//!
//! Reads dictionaries, `polyMesh` lists and `vol*Field` files, discovers time
//! directories and applies the standard time selection options.

mod case;
mod cursor;
mod dictionary;
mod error;
mod field;
mod foam_file;
mod list;
mod mesh;
mod time;
mod token;

pub use case::{DEFAULT_REGION, FoamCase};
pub use cursor::TokenCursor;
pub use dictionary::{Dictionary, Entry};
pub use error::{FoamError, SyntaxError};
pub use field::{ReadValue, read_vol_field};
pub use foam_file::FoamFile;
pub use mesh::read_poly_mesh;
pub use time::{Instant, TimeRange, TimeSelector, find_times, parse_time_ranges};
pub use token::{Spanned, Token, tokenize};
