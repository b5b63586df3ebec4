mod generic_matrix;
mod matrix;
mod serialization;
mod vector;

pub type Vector<T> = vector::Vector<T>;
pub type Matrix<T> = matrix::Matrix<T>;

pub trait Scalar: nalgebra::Scalar {}
impl<T> Scalar for T where T: nalgebra::Scalar {}
