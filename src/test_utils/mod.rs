#![allow(missing_docs)]

pub(crate) mod http;

use axum_test::TestServer;
use rusqlite::Connection;

use crate::{AppState, Database, build_router, db::initialize};

pub(crate) use http::{assert_content_type, assert_error, must_create_transaction};

/// A database in memory with the tables created.
pub(crate) fn get_test_database() -> Database {
    Database::new(must_create_test_connection())
}

pub(crate) fn must_create_test_connection() -> Connection {
    let connection =
        Connection::open_in_memory().expect("could not create in-memory SQLite database");
    initialize(&connection).expect("could not initialize test DB");

    connection
}

pub(crate) fn get_test_server() -> TestServer {
    let state = AppState::new(Connection::open_in_memory().unwrap())
        .expect("could not create app state");

    TestServer::try_new(build_router(state)).expect("Could not create test server.")
}

/// A server whose database has no tables, so every query fails.
pub(crate) fn get_broken_test_server() -> TestServer {
    let state = AppState {
        database: Database::new(Connection::open_in_memory().unwrap()),
    };

    TestServer::try_new(build_router(state)).expect("Could not create test server.")
}
