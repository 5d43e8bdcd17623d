use chrono::NaiveDateTime;

#[derive(Debug, Clone)]
pub struct Player {
    pub id: i32,
    pub name: String,
    pub created_at: Option<NaiveDateTime>,
}

/// A completed match. Written exactly once; there are no updates and no
/// representation for a draw.
#[derive(Debug, Clone)]
pub struct Match {
    pub id: i32,
    pub winner_id: i32,
    pub loser_id: i32,
    pub created_at: Option<NaiveDateTime>,
}
