// Running commands (GET /api/command)

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Command {
    pub name: String,
    pub state: String,
}
