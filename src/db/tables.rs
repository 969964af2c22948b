/// Provides constants and the schema of the "product" table.
pub struct ProductTable;

impl ProductTable {
    /// The name of the database table
    const TABLE_NAME: &'static str = "product";

    /// Caller-supplied primary key.
    const COLUMN_ID: &'static str = "product_id";

    const COLUMN_NAME: &'static str = "name";

    const COLUMN_DESCRIPTION: &'static str = "description";

    /// SQL statement for creating the product table.
    pub fn create_table() -> String {
        format!(
            "CREATE TABLE IF NOT EXISTS {} (
                {} TEXT PRIMARY KEY NOT NULL,
                {} TEXT NOT NULL,
                {} TEXT NOT NULL
            )",
            Self::TABLE_NAME,
            Self::COLUMN_ID,
            Self::COLUMN_NAME,
            Self::COLUMN_DESCRIPTION
        )
    }
}

/// Provides constants and the schema of the "location" table.
pub struct LocationTable;

impl LocationTable {
    /// The name of the database table
    const TABLE_NAME: &'static str = "location";

    /// Caller-supplied primary key.
    const COLUMN_ID: &'static str = "location_id";

    const COLUMN_NAME: &'static str = "name";

    /// SQL statement for creating the location table.
    pub fn create_table() -> String {
        format!(
            "CREATE TABLE IF NOT EXISTS {} (
                {} TEXT PRIMARY KEY NOT NULL,
                {} TEXT NOT NULL
            )",
            Self::TABLE_NAME,
            Self::COLUMN_ID,
            Self::COLUMN_NAME
        )
    }
}

/// Provides constants and the schema of the append-only "product_movement" ledger.
pub struct MovementTable;

impl MovementTable {
    /// The name of the database table
    const TABLE_NAME: &'static str = "product_movement";

    /// System-generated primary key.
    const COLUMN_ID: &'static str = "movement_id";

    const COLUMN_PRODUCT_ID: &'static str = "product_id";

    /// NULL when stock enters from outside the system.
    const COLUMN_FROM_LOCATION: &'static str = "from_location";

    /// NULL when stock leaves the system.
    const COLUMN_TO_LOCATION: &'static str = "to_location";

    const COLUMN_QTY: &'static str = "qty";

    /// Insertion time, stamped by the application.
    const COLUMN_TIMESTAMP: &'static str = "timestamp";

    /// SQL statement for creating the movement table.
    ///
    /// `product_id` and the location columns are reference-shaped but carry no
    /// foreign key constraint.
    pub fn create_table() -> String {
        format!(
            "CREATE TABLE IF NOT EXISTS {} (
                {} INTEGER PRIMARY KEY AUTOINCREMENT,
                {} TEXT NOT NULL,
                {} TEXT,
                {} TEXT,
                {} INTEGER NOT NULL,
                {} TEXT NOT NULL
            )",
            Self::TABLE_NAME,
            Self::COLUMN_ID,
            Self::COLUMN_PRODUCT_ID,
            Self::COLUMN_FROM_LOCATION,
            Self::COLUMN_TO_LOCATION,
            Self::COLUMN_QTY,
            Self::COLUMN_TIMESTAMP
        )
    }
}
