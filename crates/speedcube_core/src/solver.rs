use serde::{Deserialize, Serialize};

use crate::{CubeSize, CubeState, MoveError};

/// Request to an external solving service for a 3x3x3 cube.
///
/// The service receives the facelet string as the `state` query parameter of
/// a `POST` to `{base_url}/solve` and responds with a solution as plain text.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SolveRequest {
    /// Base URL of the service, without a trailing slash.
    pub base_url: String,
    /// Face-letter facelet string.
    pub state: String,
}

impl SolveRequest {
    /// Builds a request for a cube state. Only 3x3x3 cubes are supported.
    pub fn new(base_url: &str, state: &impl CubeState) -> Result<Self, MoveError> {
        if state.size() != CubeSize::THREE {
            return Err(MoveError::SizeMismatch {
                expected: CubeSize::THREE,
                actual: state.size(),
            });
        }
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            state: state.to_facelet_string(),
        })
    }

    /// Returns the endpoint without the query string.
    pub fn endpoint(&self) -> String {
        format!("{}/solve", self.base_url)
    }

    /// Returns the full URL including the query string.
    pub fn url(&self) -> String {
        format!("{}?state={}", self.endpoint(), self.state)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{FaceletState, NotationFeatures, PermutationState, apply_notation};

    #[test]
    fn test_solve_request_url() {
        let state = apply_notation(&PermutationState::default(), "R", NotationFeatures::STRICT).unwrap();
        let req = SolveRequest::new("http://localhost:8080/", &state).unwrap();
        assert_eq!("http://localhost:8080/solve", req.endpoint());
        assert_eq!(
            "http://localhost:8080/solve?state=UUFUUFUUFRRRRRRRRRFFDFFDFFDDDBDDBDDBLLLLLLLLLUBBUBBUBB",
            req.url(),
        );
    }

    #[test]
    fn test_solve_request_rejects_other_sizes() {
        let size = CubeSize::new(4).unwrap();
        assert_eq!(
            Err(MoveError::SizeMismatch {
                expected: CubeSize::THREE,
                actual: size,
            }),
            SolveRequest::new("http://localhost", &FaceletState::new_solved(size)),
        );
    }
}
