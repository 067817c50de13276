use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: i64,  // atribuído pelo servidor, sequencial
    pub name: String,
    pub email: String,
}

/// Payload de criação: o id ainda não existe
#[derive(Debug, Deserialize, Clone, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct NewUser {
    /// Nome livre, sem validação
    pub name: String,
    /// Email livre, sem unicidade nem formato
    pub email: String,
}

impl NewUser {
    pub fn with_id(self, id: i64) -> User {
        User {
            id,
            name: self.name,
            email: self.email,
        }
    }
}
