use serde::ser::SerializeStruct;
use serde::Deserialize;

use crate::Matrix;

impl<T> serde::Serialize for Matrix<T>
where
    T: serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        // data is written in logical row-major order, whatever the access order
        let data: Vec<&T> = self.indices().map(|(i, j)| &self[(i, j)]).collect();
        let mut state = serializer.serialize_struct("Matrix", 3)?;
        state.serialize_field("rows", &self.rows())?;
        state.serialize_field("cols", &self.cols())?;
        state.serialize_field("data", &data)?;
        state.end()
    }
}

impl<'de, T> serde::Deserialize<'de> for Matrix<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct MatrixData<T> {
            rows: usize,
            cols: usize,
            data: Vec<T>,
        }

        let MatrixData { rows, cols, data } = MatrixData::deserialize(deserializer)?;

        Matrix::from_shape_vec(rows, cols, data).map_err(serde::de::Error::custom)
    }
}
