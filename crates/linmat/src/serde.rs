use crate::{matrix::Matrix, vector::Vector};

use serde::ser::SerializeStruct;
use serde::Deserialize;

impl serde::Serialize for Vector {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

impl<'de> serde::Deserialize<'de> for Vector {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Vec::<f64>::deserialize(deserializer).map(Vector::new)
    }
}

impl serde::Serialize for Matrix {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("Matrix", 1)?;
        state.serialize_field("rows", self.row_vectors())?;
        state.end()
    }
}

impl<'de> serde::Deserialize<'de> for Matrix {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct MatrixData {
            rows: Vec<Vector>,
        }

        let MatrixData { rows } = MatrixData::deserialize(deserializer)?;

        // rows of unequal length are rejected here, not at first use
        Matrix::new(rows).map_err(<D::Error as serde::de::Error>::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_vector() -> Result<(), Box<dyn std::error::Error>> {
        let v = Vector::from([1.0, 2.5, -3.0]);
        let serialized = serde_json::to_string(&v)?;
        assert_eq!(serialized, "[1.0,2.5,-3.0]");
        let deserialized: Vector = serde_json::from_str(&serialized)?;
        assert_eq!(v, deserialized);
        Ok(())
    }

    #[test]
    fn test_serde_matrix() -> Result<(), Box<dyn std::error::Error>> {
        let m = Matrix::from([[1.0, 2.0], [3.0, 4.0]]);
        let serialized = serde_json::to_string(&m)?;
        assert_eq!(serialized, r#"{"rows":[[1.0,2.0],[3.0,4.0]]}"#);
        let deserialized: Matrix = serde_json::from_str(&serialized)?;
        assert_eq!(m, deserialized);
        Ok(())
    }

    #[test]
    fn test_serde_matrix_ragged() {
        let result = serde_json::from_str::<Matrix>(r#"{"rows":[[1.0,2.0],[3.0]]}"#);
        assert!(result.is_err());
    }
}
