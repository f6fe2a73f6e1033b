use sea_orm::DatabaseConnection;

use crate::swapi::SwapiClient;

/// Handles shared by every service: the local store and the remote catalog client.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub swapi_client: SwapiClient,
}

/// Builds state from a database connection and a SWAPI base URL.
///
/// Lets test contexts hand over their in-memory database and mock server without
/// depending on this crate.
impl From<(DatabaseConnection, String)> for AppState {
    fn from((db, swapi_url): (DatabaseConnection, String)) -> Self {
        Self {
            db,
            swapi_client: SwapiClient::new(swapi_url),
        }
    }
}
