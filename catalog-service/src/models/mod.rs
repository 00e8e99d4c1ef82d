pub mod perfume;

pub use perfume::{Perfume, PERFUME_COLLECTION};
