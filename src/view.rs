use crate::{
    catalog::Catalog,
    models::RelationshipRecord,
    query::{by_generation, search},
    resolver::{resolve_path, PathResolution},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchMsg {
    SetQuery(String),
    SelectGeneration(i32),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchView {
    query: String,
    selected_generation: Option<i32>,
    default_generation: i32,
}

impl SearchView {
    pub fn new(default_generation: i32) -> Self {
        Self {
            query: String::new(),
            selected_generation: Some(default_generation),
            default_generation,
        }
    }

    pub fn update(self, msg: SearchMsg) -> Self {
        match msg {
            SearchMsg::SetQuery(query) => {
                let selected_generation = if query.trim().is_empty() {
                    self.selected_generation
                } else {
                    None
                };
                Self {
                    query,
                    selected_generation,
                    ..self
                }
            }
            SearchMsg::SelectGeneration(generation) => Self {
                query: String::new(),
                selected_generation: Some(generation),
                ..self
            },
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn selected_generation(&self) -> Option<i32> {
        self.selected_generation
    }

    pub fn results(&self, catalog: &Catalog) -> Vec<&'static RelationshipRecord> {
        if !self.query.trim().is_empty() {
            return search(catalog, &self.query);
        }
        let generation = self.selected_generation.unwrap_or(self.default_generation);
        by_generation(catalog, generation)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalculatorMsg {
    AddRelation(String),
    Clear,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CalculatorView {
    path: Vec<String>,
}

impl CalculatorView {
    pub fn update(self, msg: CalculatorMsg) -> Self {
        match msg {
            CalculatorMsg::AddRelation(label) => {
                let mut path = self.path;
                path.push(label);
                Self { path }
            }
            CalculatorMsg::Clear => Self::default(),
        }
    }

    pub fn path(&self) -> &[String] {
        &self.path
    }

    pub fn resolution(&self, catalog: &Catalog) -> PathResolution {
        resolve_path(catalog, &self.path)
    }

    pub fn message(&self, catalog: &Catalog) -> Option<String> {
        match self.resolution(catalog) {
            PathResolution::NotFound { search_term } => {
                Some(PathResolution::not_found_message(&search_term))
            }
            PathResolution::NoSelection | PathResolution::Found { .. } => None,
        }
    }
}
