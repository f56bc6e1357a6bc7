//! Integration test for Swagger/OpenAPI extraction

use api_endpoint_counter_parser::{ApiDocument, DocumentKind};

#[test]
fn test_openapi_operations_share_one_path() {
    let spec = r#"{"openapi":"3.0.0","paths":{"/v1/users/{id}":{"get":{},"post":{}}}}"#;

    let document = ApiDocument::from_content(spec, None).unwrap();
    assert_eq!(document.kind(), DocumentKind::Swagger);

    let aggregate = document.extract().aggregate;
    assert_eq!(aggregate.total, 2);
    assert_eq!(aggregate.methods.get("GET"), Some(1));
    assert_eq!(aggregate.methods.get("POST"), Some(1));
    assert_eq!(aggregate.methods.len(), 2);
    assert_eq!(aggregate.endpoints.get("/v1/users/:id"), Some(2));
    assert_eq!(aggregate.endpoints.len(), 1);
    assert_eq!(aggregate.bases.get("users"), Some(2));
    assert_eq!(aggregate.bases.len(), 1);
}

#[test]
fn test_swagger_two_yaml() {
    let spec = r#"
swagger: "2.0"
info:
  title: Petstore
  version: 1.0.0
basePath: /api
paths:
  /pets/:
    get:
      responses:
        200:
          description: ok
    post:
      responses:
        201:
          description: created
  /pets/{petId}:
    parameters:
      - name: petId
        in: path
        required: true
        type: string
    get:
      responses:
        200:
          description: ok
    delete:
      responses:
        204:
          description: deleted
  /V2/stores/{storeId}/inventory:
    Put: {}
  /:
    head: {}
"#;

    let aggregate = ApiDocument::from_content(spec, None)
        .unwrap()
        .extract()
        .aggregate;

    assert_eq!(aggregate.total, 6);
    assert_eq!(
        aggregate.methods.iter().collect::<Vec<_>>(),
        vec![("GET", 2), ("POST", 1), ("DELETE", 1), ("PUT", 1), ("HEAD", 1)]
    );
    assert_eq!(
        aggregate.endpoints.iter().collect::<Vec<_>>(),
        vec![
            ("/pets", 2),
            ("/pets/:petId", 2),
            ("/V2/stores/:storeId/inventory", 1),
            ("/", 1)
        ]
    );
    assert_eq!(
        aggregate.bases.iter().collect::<Vec<_>>(),
        vec![("pets", 4), ("stores", 1), ("(root)", 1)]
    );
}

#[test]
fn test_histogram_sums_equal_total() {
    let spec = r#"{
        "openapi": "3.1.0",
        "paths": {
            "/v1": { "get": {} },
            "/v1/orders": { "get": {}, "post": {}, "summary": "Orders" },
            "/v1/orders/{orderId}/": { "get": {}, "patch": {}, "delete": {} },
            "health": { "options": {}, "trace": {} }
        }
    }"#;

    let aggregate = ApiDocument::from_content(spec, None)
        .unwrap()
        .extract()
        .aggregate;

    assert_eq!(aggregate.total, 8);
    assert_eq!(aggregate.methods.sum(), aggregate.total);
    assert_eq!(aggregate.endpoints.sum(), aggregate.total);
    assert_eq!(aggregate.bases.sum(), aggregate.total);
    assert_eq!(aggregate.bases.get("v1"), Some(1));
    assert_eq!(aggregate.bases.get("orders"), Some(5));
    assert_eq!(aggregate.endpoints.get("/health"), Some(2));
}

#[test]
fn test_every_brace_variable_is_rewritten() {
    let spec = r#"{
        "swagger": "2.0",
        "paths": {
            "/orgs/{org}/repos/{repo}/": { "get": {} },
            "/files/{name}.{ext}": { "get": {} }
        }
    }"#;

    let aggregate = ApiDocument::from_content(spec, None)
        .unwrap()
        .extract()
        .aggregate;

    for (path, _) in aggregate.endpoints.iter() {
        assert!(path.starts_with('/'), "{path}");
        assert!(!path.ends_with('/'), "{path}");
        assert!(!path.contains('{') && !path.contains('}'), "{path}");
    }
    assert_eq!(aggregate.endpoints.get("/orgs/:org/repos/:repo"), Some(1));
    assert_eq!(aggregate.endpoints.get("/files/:name.:ext"), Some(1));
}
