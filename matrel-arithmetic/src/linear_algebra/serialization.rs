use nalgebra::{Dim, RawStorage, Scalar};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::linear_algebra::generic_matrix::GenericMatrix;

impl<T: Scalar, R: Dim, C: Dim, S: RawStorage<T, R, C>> Serialize for GenericMatrix<T, R, C, S>
where
    nalgebra::Matrix<T, R, C, S>: Serialize,
{
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de, T: Scalar, R: Dim, C: Dim, S: RawStorage<T, R, C>> Deserialize<'de> for GenericMatrix<T, R, C, S>
where
    nalgebra::Matrix<T, R, C, S>: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        nalgebra::Matrix::<T, R, C, S>::deserialize(deserializer).map(|x| x.into())
    }
}
