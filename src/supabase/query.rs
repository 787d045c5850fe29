use serde_json::{Map, Value};

/// Declarative selection against one relation, rendered to PostgREST query parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub relation: String,
    pub columns: String,
    pub filters: Vec<Filter>,
    pub order: Option<Order>,
    pub limit: Option<u32>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    Eq { column: String, value: String },
    ILike { column: String, pattern: Pattern },
}

/// Case-insensitive title patterns.
#[derive(Debug, Clone, PartialEq)]
pub enum Pattern {
    Prefix(String),
    Contains(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub column: OrderColumn,
    pub ascending: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum OrderColumn {
    Column(String),
    /// Column of an embedded to-one relation, addressed by its alias in the projection.
    Referenced { relation: String, column: String },
}

/// Call of a named stored procedure.
#[derive(Debug, Clone, PartialEq)]
pub struct RpcCall {
    pub function: String,
    pub args: Map<String, Value>,
}

impl Selection {
    pub fn table(relation: &str) -> Self {
        Self {
            relation: relation.to_string(),
            columns: "*".to_string(),
            filters: Vec::new(),
            order: None,
            limit: None,
        }
    }

    pub fn columns(mut self, columns: &str) -> Self {
        self.columns = columns.to_string();
        self
    }

    pub fn eq(mut self, column: &str, value: impl Into<String>) -> Self {
        self.filters.push(Filter::Eq {
            column: column.to_string(),
            value: value.into(),
        });
        self
    }

    pub fn ilike(mut self, column: &str, pattern: Pattern) -> Self {
        self.filters.push(Filter::ILike {
            column: column.to_string(),
            pattern,
        });
        self
    }

    pub fn order(mut self, column: OrderColumn, ascending: bool) -> Self {
        self.order = Some(Order { column, ascending });
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        // PostgREST rejects whitespace inside the select list
        let select: String = self.columns.split_whitespace().collect();
        let mut pairs = vec![("select".to_string(), select)];

        for filter in &self.filters {
            pairs.push(match filter {
                Filter::Eq { column, value } => (column.clone(), format!("eq.{value}")),
                Filter::ILike { column, pattern } => {
                    (column.clone(), format!("ilike.{}", pattern.render()))
                }
            });
        }

        if let Some(order) = &self.order {
            let direction = if order.ascending { "asc" } else { "desc" };
            pairs.push((
                "order".to_string(),
                format!("{}.{direction}", order.column.render()),
            ));
        }

        if let Some(limit) = self.limit {
            pairs.push(("limit".to_string(), limit.to_string()));
        }

        pairs
    }
}

impl Pattern {
    pub fn render(&self) -> String {
        match self {
            Self::Prefix(value) => format!("{value}%"),
            Self::Contains(value) => format!("%{value}%"),
        }
    }
}

impl OrderColumn {
    pub fn column(name: &str) -> Self {
        Self::Column(name.to_string())
    }

    pub fn referenced(relation: &str, column: &str) -> Self {
        Self::Referenced {
            relation: relation.to_string(),
            column: column.to_string(),
        }
    }

    pub fn render(&self) -> String {
        match self {
            Self::Column(name) => name.clone(),
            Self::Referenced { relation, column } => format!("{relation}({column})"),
        }
    }
}

impl RpcCall {
    pub fn new(function: &str) -> Self {
        Self {
            function: function.to_string(),
            args: Map::new(),
        }
    }

    pub fn arg(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.args.insert(name.to_string(), value.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(selection: &Selection) -> Vec<(String, String)> {
        selection.to_query_pairs()
    }

    fn expected(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_select_list_is_compacted() {
        let selection = Selection::table("songs").columns(
            "
            song_id,
            artist:artists!inner(artist_id, artist_name)
            ",
        );

        assert_eq!(
            pairs(&selection),
            expected(&[("select", "song_id,artist:artists!inner(artist_id,artist_name)")])
        );
    }

    #[test]
    fn test_filters_order_and_limit() {
        let selection = Selection::table("songs")
            .columns("song_id,title")
            .eq("year", "2017")
            .ilike("title", Pattern::Contains("love".to_string()))
            .order(OrderColumn::referenced("artist", "artist_name"), true)
            .limit(5);

        assert_eq!(
            pairs(&selection),
            expected(&[
                ("select", "song_id,title"),
                ("year", "eq.2017"),
                ("title", "ilike.%love%"),
                ("order", "artist(artist_name).asc"),
                ("limit", "5"),
            ])
        );
    }

    #[test]
    fn test_descending_order() {
        let selection = Selection::table("songs").order(OrderColumn::column("danceability"), false);
        assert_eq!(
            pairs(&selection),
            expected(&[("select", "*"), ("order", "danceability.desc")])
        );
    }

    #[test]
    fn test_patterns() {
        assert_eq!(Pattern::Prefix("Hel".to_string()).render(), "Hel%");
        assert_eq!(Pattern::Contains("ell".to_string()).render(), "%ell%");
    }

    #[test]
    fn test_rpc_args() {
        let call = RpcCall::new("top_songs_coffee").arg("limit_count", 7);
        assert_eq!(call.function, "top_songs_coffee");
        assert_eq!(call.args.get("limit_count"), Some(&Value::from(7)));
    }
}
