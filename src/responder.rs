use actix_web::{Error, HttpRequest, HttpResponse, Responder};
use futures_util::future::{ready, Ready};
use serde::Serialize;

use crate::{LogExtensionErr, LogExtensionOk};
use crate::model::paging_response::PagingResponse;

const CONTENT_TYPE_JSON: &str = "application/json";

/// Lets a handler return a page directly; it is sent as a JSON body.
impl<T: Serialize> Responder for PagingResponse<T> {
    type Error = Error;
    type Future = Ready<Result<HttpResponse, Error>>;

    fn respond_to(self, req: &HttpRequest) -> Self::Future {
        let response = serde_json::to_string(&self)
            .log_if_ok(|_| debug!("Responding to {} with page total={}, items={}",
                                  req.path(), self.total(), self.items().len()))
            .log_if_err(|err| error!("Could not serialize page for {}, Err={:#?}", req.path(), err))
            .map(|body| HttpResponse::Ok().content_type(CONTENT_TYPE_JSON).body(body))
            .unwrap_or_else(|_| HttpResponse::InternalServerError().finish());
        ready(Ok(response))
    }
}
