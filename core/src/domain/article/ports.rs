use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    search::{
        entities::page::{Listing, ResultPage},
        value_objects::SearchParams,
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait ArticleService: Send + Sync {
    /// One page of articles matching the request
    fn search_articles(
        &self,
        params: SearchParams,
    ) -> impl Future<Output = Result<ResultPage, CoreError>> + Send;

    /// Every article matching the request
    fn list_articles(
        &self,
        params: SearchParams,
    ) -> impl Future<Output = Result<Listing, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait ArticleRepository: Send + Sync {
    fn search_articles(
        &self,
        params: SearchParams,
    ) -> impl Future<Output = Result<ResultPage, CoreError>> + Send;

    fn list_articles(
        &self,
        params: SearchParams,
    ) -> impl Future<Output = Result<Listing, CoreError>> + Send;
}
