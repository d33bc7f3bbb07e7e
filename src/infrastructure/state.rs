use std::sync::Arc;

use crate::{
    api::{graphql::GraphQLDispatcher, rest::RestDispatcher},
    infrastructure::config::Config,
};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub rest: RestDispatcher,
    pub graphql: GraphQLDispatcher,
}

impl AppState {
    pub fn new(config: Arc<Config>) -> Self {
        Self {
            config,
            rest: RestDispatcher::default(),
            graphql: GraphQLDispatcher::default(),
        }
    }

    pub fn with_dispatchers(
        config: Arc<Config>,
        rest: RestDispatcher,
        graphql: GraphQLDispatcher,
    ) -> Self {
        Self {
            config,
            rest,
            graphql,
        }
    }
}
