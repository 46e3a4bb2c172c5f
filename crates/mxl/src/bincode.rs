use crate::Matrix;

impl<T> bincode::enc::Encode for Matrix<T>
where
    T: bincode::enc::Encode,
{
    fn encode<E: bincode::enc::Encoder>(
        &self,
        encoder: &mut E,
    ) -> Result<(), bincode::error::EncodeError> {
        bincode::Encode::encode(&self.rows(), encoder)?;
        bincode::Encode::encode(&self.cols(), encoder)?;
        // same framing as a Vec<T>: length, then logical row-major elements
        bincode::Encode::encode(&(self.numel() as u64), encoder)?;
        for (i, j) in self.indices() {
            bincode::Encode::encode(&self[(i, j)], encoder)?;
        }
        Ok(())
    }
}

impl<T, C> bincode::de::Decode<C> for Matrix<T>
where
    T: bincode::de::Decode<C>,
{
    fn decode<D: bincode::de::Decoder<Context = C>>(
        decoder: &mut D,
    ) -> Result<Self, bincode::error::DecodeError> {
        let rows: usize = bincode::Decode::decode(decoder)?;
        let cols: usize = bincode::Decode::decode(decoder)?;
        let data: Vec<T> = bincode::Decode::decode(decoder)?;
        Matrix::from_shape_vec(rows, cols, data)
            .map_err(|e| bincode::error::DecodeError::OtherString(e.to_string()))
    }
}
