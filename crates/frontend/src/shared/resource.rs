//! Per-entity descriptors used by the generic list, detail and form pages.

use chrono::{DateTime, Utc};
use contracts::shared::api::Page;
use contracts::shared::form::{EntityForm, SubmitRequest};
use contracts::shared::validation::ValidationErrors;
use gloo_net::http::Method;
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use std::marker::PhantomData;

use super::api_client::{ApiClient, ApiError};
use super::components::relation_select::OptionSource;
use super::list_state::PagingMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateMethod {
    Patch,
    Put,
}

/// Endpoint prefixes of one resource. Item ids are appended url-encoded.
#[derive(Debug, Clone, Copy)]
pub struct Endpoints {
    pub list: &'static str,
    pub detail: &'static str,
    pub create: &'static str,
    pub update: &'static str,
    pub update_method: UpdateMethod,
    pub delete: &'static str,
}

impl Endpoints {
    pub fn item(prefix: &str, id: &str) -> String {
        format!("{}/{}", prefix, urlencoding::encode(id))
    }
}

/// What a table cell or detail row shows.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Status {
        on: bool,
        on_label: &'static str,
        off_label: &'static str,
    },
    Image(Option<String>),
}

impl CellValue {
    pub fn text(value: impl Into<String>) -> Self {
        CellValue::Text(value.into())
    }

    pub fn optional(value: Option<&str>) -> Self {
        CellValue::Text(
            value
                .filter(|v| !v.trim().is_empty())
                .unwrap_or("-")
                .to_string(),
        )
    }

    pub fn published(on: bool) -> Self {
        CellValue::Status {
            on,
            on_label: "Published",
            off_label: "Draft",
        }
    }

    pub fn active(on: bool) -> Self {
        CellValue::Status {
            on,
            on_label: "Active",
            off_label: "Inactive",
        }
    }
}

pub struct Column<T> {
    pub header: &'static str,
    pub render: fn(&T) -> CellValue,
}

pub const ACTIVE_OPTIONS: &[(&str, &str)] = &[("true", "Active"), ("false", "Inactive")];
pub const PUBLISHED_OPTIONS: &[(&str, &str)] = &[("true", "Published"), ("false", "Draft")];

/// Local match of a `"true"`/`"false"` filter value.
pub fn flag_matches(flag: bool, value: &str) -> bool {
    match value {
        "true" => flag,
        "false" => !flag,
        _ => true,
    }
}

pub fn timestamp_cell(ts: Option<&DateTime<Utc>>) -> CellValue {
    match ts {
        Some(ts) => CellValue::Text(ts.format("%Y-%m-%d %H:%M").to_string()),
        None => CellValue::text("-"),
    }
}

/// A list filter rendered as a select box.
#[derive(Debug, Clone)]
pub struct FilterDef {
    pub key: &'static str,
    pub label: &'static str,
    pub source: OptionSource,
}

/// Everything the generic pages need to know about one resource.
pub trait EntitySchema: 'static {
    type Item: Clone + DeserializeOwned + Send + Sync + 'static;
    type Form: EntityForm<Entity = Self::Item> + Send + Sync + 'static;

    /// Route segment, e.g. `movies`.
    const ROUTE: &'static str;
    const TITLE: &'static str;
    const SINGULAR: &'static str;
    const PAGING: PagingMode;

    fn endpoints() -> Endpoints;

    fn item_id(item: &Self::Item) -> String;

    fn display_name(item: &Self::Item) -> String;

    /// Local search, used by client-paged lists.
    fn matches_search(item: &Self::Item, needle: &str) -> bool;

    /// Local filter, used by client-paged lists.
    fn matches_filter(_item: &Self::Item, _key: &str, _value: &str) -> bool {
        true
    }

    fn columns() -> Vec<Column<Self::Item>>;

    fn filters() -> Vec<FilterDef> {
        Vec::new()
    }

    fn detail_rows(item: &Self::Item) -> Vec<(&'static str, CellValue)>;

    fn form_fields(form: RwSignal<Self::Form>, errors: Signal<ValidationErrors>) -> AnyView;
}

/// CRUD calls for one resource.
pub struct EntityService<S: EntitySchema> {
    client: ApiClient,
    _schema: PhantomData<fn() -> S>,
}

impl<S: EntitySchema> Clone for EntityService<S> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            _schema: PhantomData,
        }
    }
}

impl<S: EntitySchema> EntityService<S> {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            _schema: PhantomData,
        }
    }

    pub async fn list(
        &self,
        query: &contracts::shared::api::ListQuery,
    ) -> Result<Page<S::Item>, ApiError> {
        self.client.list(S::endpoints().list, query).await
    }

    pub async fn fetch(&self, id: &str) -> Result<S::Item, ApiError> {
        self.client
            .get(&Endpoints::item(S::endpoints().detail, id))
            .await
    }

    pub async fn submit(
        &self,
        request: SubmitRequest<
            <S::Form as EntityForm>::Create,
            <S::Form as EntityForm>::Update,
        >,
    ) -> Result<(), ApiError> {
        let endpoints = S::endpoints();
        match request {
            SubmitRequest::Create(dto) => {
                self.client.write(Method::POST, endpoints.create, &dto).await
            }
            SubmitRequest::Update { id, patch } => {
                let method = match endpoints.update_method {
                    UpdateMethod::Patch => Method::PATCH,
                    UpdateMethod::Put => Method::PUT,
                };
                self.client
                    .write(method, &Endpoints::item(endpoints.update, &id), &patch)
                    .await
            }
        }
    }

    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.client
            .delete(&Endpoints::item(S::endpoints().delete, id))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_path_encodes_id() {
        assert_eq!(Endpoints::item("/server", "abc123"), "/server/abc123");
        assert_eq!(Endpoints::item("/episode", "a b/c"), "/episode/a%20b%2Fc");
    }

    #[test]
    fn test_flag_matches() {
        assert!(flag_matches(true, "true"));
        assert!(!flag_matches(true, "false"));
        assert!(flag_matches(false, "false"));
        assert!(flag_matches(false, ""));
    }

    #[test]
    fn test_optional_cell_placeholder() {
        assert_eq!(CellValue::optional(None), CellValue::text("-"));
        assert_eq!(CellValue::optional(Some("  ")), CellValue::text("-"));
        assert_eq!(CellValue::optional(Some("VN")), CellValue::text("VN"));
    }
}
