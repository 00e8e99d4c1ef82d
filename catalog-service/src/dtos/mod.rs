pub mod perfumes;

pub use perfumes::{CreatePerfumeResponse, ListPerfumesParams, PerfumeResponse};
