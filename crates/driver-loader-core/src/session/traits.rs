use std::collections::BTreeMap;

use crate::session::error::SessionError;
use crate::session::page::{Page, Pageable};

/// One result row keyed by column name
pub type Row = BTreeMap<String, serde_json::Value>;

pub type SessionResult<T> = Result<T, SessionError>;

/// Schema-level SQL session a driver plugin can provide.
///
/// `schema` is optional wherever the current connection's schema is an
/// acceptable default. `text` arguments may hold several statements; drivers
/// split and run them one at a time.
pub trait SchemaSession: Send + Sync {
    /// Run every statement in `text`, optionally in one transaction and
    /// optionally collecting results.
    fn execute_all(
        &self,
        _schema: Option<&str>,
        _text: &str,
        _transactional: bool,
        _with_results: bool,
    ) -> SessionResult<Vec<Vec<Row>>> {
        Err(SessionError::NotImplemented("execute_all"))
    }

    /// Paged variant of [`execute_all`](Self::execute_all).
    fn execute_all_paged(
        &self,
        _schema: Option<&str>,
        _text: &str,
        _pageable: Pageable,
        _transactional: bool,
        _with_results: bool,
    ) -> SessionResult<Vec<Page<Row>>> {
        Err(SessionError::NotImplemented("execute_all_paged"))
    }

    /// Transactional, result-collecting run with the default page size.
    fn execute_all_default(&self, schema: Option<&str>, text: &str) -> SessionResult<Vec<Page<Row>>> {
        self.execute_all_paged(schema, text, Pageable::default(), true, true)
    }

    fn execute_one_update(
        &self,
        _schema: Option<&str>,
        _sql: &str,
        _transactional: bool,
        _with_results: bool,
    ) -> SessionResult<()> {
        Err(SessionError::NotImplemented("execute_one_update"))
    }

    /// Single update in a transaction, no results.
    fn execute_update(&self, schema: Option<&str>, sql: &str) -> SessionResult<()> {
        self.execute_one_update(schema, sql, true, false)
    }

    fn execute_one_query(&self, _schema: Option<&str>, _sql: &str) -> SessionResult<Vec<Row>> {
        Err(SessionError::NotImplemented("execute_one_query"))
    }

    fn execute_one_query_paged(&self, _schema: Option<&str>, _sql: &str, _pageable: Pageable) -> SessionResult<Page<Row>> {
        Err(SessionError::NotImplemented("execute_one_query_paged"))
    }

    /// Run statements in one transaction without results.
    fn execute_batch(&self, _schema: Option<&str>, _statements: &[String]) -> SessionResult<()> {
        Err(SessionError::NotImplemented("execute_batch"))
    }

    fn call_procedure(&self, _schema: Option<&str>, _sql: &str, _args: &[serde_json::Value]) -> SessionResult<Vec<Row>> {
        Err(SessionError::NotImplemented("call_procedure"))
    }

    fn schema_list(&self) -> SessionResult<Vec<String>> {
        Err(SessionError::NotImplemented("schema_list"))
    }

    fn schema_create(&self, _schema: &str) -> SessionResult<bool> {
        Err(SessionError::NotImplemented("schema_create"))
    }

    fn query_count(&self, _schema: Option<&str>, _sql: &str) -> SessionResult<u64> {
        Err(SessionError::NotImplemented("query_count"))
    }
}

/// Produces the dialect-specific statement that sets a table's primary key.
pub trait PkSetter {
    fn set_pk(&self, pk_name: &str) -> String;
}
