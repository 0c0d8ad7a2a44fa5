//! SQL word tables (upper and lower case variants)

use super::LanguageData;

const TYPES: &[&str] = &[
    "BIGINT", "BINARY", "BLOB", "BOOLEAN", "CHAR", "DATE", "DATETIME",
    "DECIMAL", "DOUBLE", "FLOAT", "INT", "INTEGER", "NUMERIC", "REAL",
    "SMALLINT", "TEXT", "TIME", "TIMESTAMP", "VARCHAR", "bigint", "blob",
    "boolean", "char", "date", "datetime", "decimal", "double", "float",
    "int", "integer", "numeric", "real", "smallint", "text", "time",
    "timestamp", "varchar",
];

const KEYWORDS: &[&str] = &[
    "ALTER", "AND", "AS", "ASC", "BETWEEN", "BY", "CASE", "CREATE",
    "DELETE", "DESC", "DISTINCT", "DROP", "ELSE", "END", "EXISTS", "FROM",
    "GROUP", "HAVING", "IN", "INDEX", "INNER", "INSERT", "INTO", "IS",
    "JOIN", "KEY", "LEFT", "LIKE", "LIMIT", "NOT", "ON", "OR", "ORDER",
    "OUTER", "PRIMARY", "RIGHT", "SELECT", "SET", "TABLE", "THEN",
    "UNION", "UPDATE", "VALUES", "VIEW", "WHEN", "WHERE", "alter", "and",
    "as", "asc", "between", "by", "case", "create", "delete", "desc",
    "distinct", "drop", "else", "end", "exists", "from", "group",
    "having", "in", "index", "inner", "insert", "into", "is", "join",
    "key", "left", "like", "limit", "not", "on", "or", "order", "outer",
    "primary", "right", "select", "set", "table", "then", "union",
    "update", "values", "view", "when", "where",
];

const BUILTINS: &[&str] = &[
    "AVG", "COALESCE", "COUNT", "MAX", "MIN", "SUM", "avg", "coalesce",
    "count", "max", "min", "sum",
];

const LITERALS: &[&str] = &["FALSE", "NULL", "TRUE", "false", "null", "true"];

const OTHERS: &[&str] = &[];

pub(super) fn data() -> LanguageData {
    LanguageData::new(TYPES, KEYWORDS, BUILTINS, LITERALS, OTHERS)
}
