pub mod types;
pub mod utils;
pub mod env;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_type_ok() {
        let h = types::Health { status: "ok" };
        assert_eq!(h.status, "ok");
    }

    #[test]
    fn message_response_omits_missing_book() {
        let body = serde_json::to_value(types::MessageResponse::<()>::message("Book not found")).unwrap();
        assert_eq!(body, serde_json::json!({"message": "Book not found"}));
    }
}
