use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateFlowchart {
    pub title: String,
    pub description: Option<String>,
    pub data: serde_json::Value,
}

/// Partial update: only fields present in the request body are applied,
/// absent fields leave the stored value untouched.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateFlowchart {
    pub title: Option<String>,
    pub description: Option<String>,
    pub data: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn create_requires_title_and_data() {
        let body = json!({"title": "Flow1", "data": {"nodes": []}});
        let req: CreateFlowchart = serde_json::from_value(body).unwrap();
        assert_eq!(req.title, "Flow1");
        assert!(req.description.is_none());
        assert_eq!(req.data, json!({"nodes": []}));

        assert!(serde_json::from_value::<CreateFlowchart>(json!({"title": "x"})).is_err());
        assert!(serde_json::from_value::<CreateFlowchart>(json!({"data": {}})).is_err());
    }

    #[test]
    fn update_keeps_absent_fields_unset() {
        let patch: UpdateFlowchart = serde_json::from_value(json!({"title": "new"})).unwrap();
        assert_eq!(patch.title.as_deref(), Some("new"));
        assert!(patch.description.is_none());
        assert!(patch.data.is_none());
    }

    #[test]
    fn empty_update_is_valid() {
        let patch: UpdateFlowchart = serde_json::from_value(json!({})).unwrap();
        assert!(patch.title.is_none());
        assert!(patch.description.is_none());
        assert!(patch.data.is_none());
    }
}
