//! Abstract interfaces over sparse matrix storage

pub mod matrix;

pub use matrix::SparseMatrix;
