use serde::Serialize;

use super::award::AwardRecord;

#[derive(Serialize)]
pub struct MoviesResponse {
    pub movies: Vec<AwardRecord>,
}

#[derive(Serialize)]
pub struct MessageResponse<'a> {
    pub message: &'a str,
}

#[derive(Serialize)]
pub struct ErrorResponse<'a> {
    pub error: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_response_wire_shape() {
        let body = serde_json::to_string(&MessageResponse {
            message: "No movies found",
        })
        .unwrap();
        assert_eq!(body, r#"{"message":"No movies found"}"#);
    }

    #[test]
    fn test_error_response_wire_shape() {
        let body = serde_json::to_string(&ErrorResponse {
            error: "Internal server error",
        })
        .unwrap();
        assert_eq!(body, r#"{"error":"Internal server error"}"#);
    }

    #[test]
    fn test_movies_response_wire_shape() {
        let body = serde_json::to_string(&MoviesResponse { movies: vec![] }).unwrap();
        assert_eq!(body, r#"{"movies":[]}"#);
    }
}
