use rowlink::Record;

#[derive(Debug, Default, Record)]
pub struct User {
    #[row(column = "id")]
    pub id: i64,
    #[row(column = "name")]
    pub name: String,
    pub visits: i32,
}

fn main() {}
