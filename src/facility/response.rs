//! Contract-style tagged responses
//!
//! Registry operations return Rust `Result`s. At the boundary they are converted
//! into `{"ok": value}` / `{"err": code}` documents.

use crate::facility::error::RegistryError;
use serde::{Deserialize, Serialize};

/// A success payload or a numeric error code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContractResponse<T> {
    /// Successful call
    Ok(T),
    /// Failed call with its error code
    Err(u32),
}

impl<T> ContractResponse<T> {
    /// Whether the response is a success
    pub fn is_ok(&self) -> bool {
        matches!(self, ContractResponse::Ok(_))
    }

    /// The error code, if the call failed
    pub fn error_code(&self) -> Option<u32> {
        match self {
            ContractResponse::Ok(_) => None,
            ContractResponse::Err(code) => Some(*code),
        }
    }

    /// The typed error, if the code is a known one
    pub fn error(&self) -> Option<RegistryError> {
        self.error_code().and_then(RegistryError::from_code)
    }
}

impl<T> From<Result<T, RegistryError>> for ContractResponse<T> {
    fn from(result: Result<T, RegistryError>) -> Self {
        match result {
            Ok(value) => ContractResponse::Ok(value),
            Err(error) => ContractResponse::Err(error.code()),
        }
    }
}

impl From<Result<(), RegistryError>> for ContractResponse<bool> {
    fn from(result: Result<(), RegistryError>) -> Self {
        match result {
            Ok(()) => ContractResponse::Ok(true),
            Err(error) => ContractResponse::Err(error.code()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FacilityId;

    #[test]
    fn test_ok_wire_format() {
        let response: ContractResponse<FacilityId> = Ok(FacilityId(1)).into();
        assert_eq!(serde_json::to_string(&response).unwrap(), r#"{"ok":1}"#);

        let response: ContractResponse<bool> = Ok(()).into();
        assert_eq!(serde_json::to_string(&response).unwrap(), r#"{"ok":true}"#);
    }

    #[test]
    fn test_err_wire_format() {
        let response: ContractResponse<bool> = Err::<(), _>(RegistryError::NotFound).into();
        assert_eq!(serde_json::to_string(&response).unwrap(), r#"{"err":404}"#);
        assert_eq!(response.error(), Some(RegistryError::NotFound));
        assert!(!response.is_ok());
    }

    #[test]
    fn test_parse_response() {
        let response: ContractResponse<u64> = serde_json::from_str(r#"{"err":401}"#).unwrap();
        assert_eq!(response, ContractResponse::Err(401));
        assert_eq!(response.error_code(), Some(401));
    }
}
