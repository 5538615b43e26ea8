use rowlink::Record;

#[derive(Debug, Default, Record)]
pub struct AuditEntry {
    #[row(column = "actor_id")]
    pub actor: i64,
    #[row(column = "action")]
    pub action: String,
    #[row(column = "weight")]
    pub weight: i16,
}

fn main() {}
