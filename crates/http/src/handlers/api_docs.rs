//! Static API documentation data.

use axum::Json;
use serde_json::{Value, json};
use todo_read_core::{DEFAULT_LIMIT, DEFAULT_PAGE, MAX_LIMIT, MIN_LIMIT, SERVICE_NAME};

fn query_param(name: &str, description: &str, schema: Value) -> Value {
    json!({
        "name": name,
        "in": "query",
        "required": false,
        "description": description,
        "schema": schema,
    })
}

fn json_content(schema: &str) -> Value {
    json!({
        "application/json": {
            "schema": { "$ref": format!("#/components/schemas/{schema}") },
        },
    })
}

fn error_response(description: &str) -> Value {
    json!({ "description": description, "content": json_content("ErrorResponse") })
}

fn list_parameters() -> Value {
    json!([
        query_param(
            "page",
            "1-based page number",
            json!({ "type": "integer", "minimum": 1, "default": DEFAULT_PAGE }),
        ),
        query_param(
            "limit",
            "Page size",
            json!({
                "type": "integer",
                "minimum": MIN_LIMIT,
                "maximum": MAX_LIMIT,
                "default": DEFAULT_LIMIT,
            }),
        ),
        query_param(
            "status",
            "Only todos with this status",
            json!({ "type": "string", "enum": ["pending", "completed"] }),
        ),
        query_param(
            "sort",
            "Sort field",
            json!({
                "type": "string",
                "enum": ["created_at", "due_date"],
                "default": "created_at",
            }),
        ),
        query_param(
            "order",
            "Sort direction",
            json!({ "type": "string", "enum": ["asc", "desc"], "default": "desc" }),
        ),
    ])
}

/// OpenAPI 3.0 document for the list endpoint.
pub fn openapi_document() -> Value {
    json!({
        "openapi": "3.0.3",
        "info": {
            "title": SERVICE_NAME,
            "version": env!("CARGO_PKG_VERSION"),
            "description": "Paginated, filtered, sorted reads over the todo read model",
        },
        "paths": {
            "/todos": {
                "get": {
                    "summary": "List todos",
                    "parameters": list_parameters(),
                    "responses": {
                        "200": {
                            "description": "One page of todos",
                            "content": json_content("ListTodosResponse"),
                        },
                        "400": error_response("Invalid parameter"),
                        "500": error_response("Database or unexpected error"),
                    },
                },
            },
        },
        "components": {
            "schemas": {
                "TodoItem": {
                    "type": "object",
                    "required": ["id", "title", "status", "created_at", "updated_at"],
                    "properties": {
                        "id": { "type": "string" },
                        "title": { "type": "string" },
                        "description": { "type": "string", "nullable": true },
                        "status": { "type": "string", "enum": ["pending", "completed"] },
                        "created_at": { "type": "string", "format": "date-time" },
                        "updated_at": { "type": "string", "format": "date-time" },
                        "due_date": { "type": "string", "format": "date", "nullable": true },
                    },
                },
                "PaginationMetadata": {
                    "type": "object",
                    "properties": {
                        "page": { "type": "integer" },
                        "limit": { "type": "integer" },
                        "total": { "type": "integer" },
                        "totalPages": { "type": "integer" },
                    },
                },
                "ListTodosResponse": {
                    "type": "object",
                    "properties": {
                        "data": {
                            "type": "array",
                            "items": { "$ref": "#/components/schemas/TodoItem" },
                        },
                        "pagination": { "$ref": "#/components/schemas/PaginationMetadata" },
                    },
                },
                "ErrorResponse": {
                    "type": "object",
                    "properties": {
                        "error": {
                            "type": "object",
                            "required": ["code", "message"],
                            "properties": {
                                "code": {
                                    "type": "string",
                                    "enum": [
                                        "INVALID_PARAMETER",
                                        "DATABASE_ERROR",
                                        "INTERNAL_ERROR",
                                        "NOT_FOUND",
                                    ],
                                },
                                "message": { "type": "string" },
                                "field": { "type": "string" },
                            },
                        },
                    },
                },
            },
        },
    })
}

pub async fn openapi_json() -> Json<Value> {
    Json(openapi_document())
}
