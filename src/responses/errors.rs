use crate::errors::ServerError;
use crate::templates::error_page;
use astra::{Body, Response, ResponseBuilder};

/// Convert a ServerError into an HTML error page with the matching status.
pub fn error_to_response(err: &ServerError) -> Response {
    let status = err.status();
    let message = match err {
        ServerError::NotFound => "The page you are looking for does not exist.".to_string(),
        ServerError::BadRequest(msg) => msg.clone(),
        // internals stay in the log
        _ => "Something went wrong on our side. Please try again.".to_string(),
    };

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", mime::TEXT_HTML_UTF_8.as_ref())
        .body(Body::from(error_page(status, &message).into_string()))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::utils::body_string;

    #[test]
    fn status_and_message_follow_the_error() {
        let resp = error_to_response(&ServerError::BadRequest("missing field 'email'".into()));
        assert_eq!(resp.status(), 400);
        assert!(body_string(resp).contains("missing field"));

        let resp = error_to_response(&ServerError::XlsxError("disk full".into()));
        assert_eq!(resp.status(), 500);
        assert!(!body_string(resp).contains("disk full"));
    }
}
