//! Response envelopes: `{"data": ..}` for one value, plus `"meta": {"count": n}` for lists.

use axum::{http::StatusCode, Json};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<ListMeta>,
}

#[derive(Debug, Serialize)]
pub struct ListMeta {
    pub count: usize,
}

pub type Reply<T> = (StatusCode, Json<Envelope<T>>);

/// `201` with the stored row.
pub fn created<T: Serialize>(row: T) -> Reply<T> {
    (StatusCode::CREATED, Json(Envelope { data: row, meta: None }))
}

/// `200` with a single value; `None` serializes as `"data": null`.
pub fn found<T: Serialize>(data: T) -> Reply<T> {
    (StatusCode::OK, Json(Envelope { data, meta: None }))
}

pub fn listed<T: Serialize>(rows: Vec<T>) -> Reply<Vec<T>> {
    let meta = ListMeta { count: rows.len() };
    (StatusCode::OK, Json(Envelope { data: rows, meta: Some(meta) }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn absent_value_keeps_data_key() {
        let (status, Json(body)) = found(None::<i32>);
        assert_eq!(status, StatusCode::OK);
        assert_eq!(serde_json::to_value(body).unwrap(), json!({ "data": null }));
    }

    #[test]
    fn lists_carry_count() {
        let (_, Json(body)) = listed(vec!["a", "b"]);
        assert_eq!(serde_json::to_value(body).unwrap(), json!({ "data": ["a", "b"], "meta": { "count": 2 } }));
    }
}
