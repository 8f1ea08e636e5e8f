use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::error::ResponseError;
use actix_web::Error as ActixError;
use std::{future::Future, pin::Pin};

use crate::error::AppError;

/// Middleware that converts any error escaping a handler into the JSON
/// [`crate::error::ErrorResponse`] envelope, so clients never see an
/// actix-shaped error body.
pub struct ErrorHandlerMiddleware;

impl<S, B> Transform<S, ServiceRequest> for ErrorHandlerMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError> + 'static,
    S::Future: 'static,
    B: actix_web::body::MessageBody + 'static,
    B::Error: Into<ActixError> + 'static,
{
    type Response = ServiceResponse<actix_web::body::BoxBody>;
    type Error = ActixError;
    type Transform = ErrorHandlerService<S>;
    type InitError = ();
    type Future = Pin<Box<dyn Future<Output = Result<Self::Transform, Self::InitError>>>>;

    fn new_transform(&self, service: S) -> Self::Future {
        Box::pin(async move { Ok(ErrorHandlerService { service }) })
    }
}

pub struct ErrorHandlerService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for ErrorHandlerService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: actix_web::body::MessageBody + 'static,
    B::Error: Into<ActixError>,
{
    type Response = ServiceResponse<actix_web::body::BoxBody>;
    type Error = ActixError;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    fn poll_ready(
        &self,
        ctx: &mut core::task::Context<'_>,
    ) -> core::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let (req_parts, _payload) = req.parts();
        let req_parts = req_parts.clone();

        let fut = self.service.call(req);

        Box::pin(async move {
            match fut.await {
                Ok(res) => Ok(res.map_into_boxed_body()),
                Err(err) => {
                    log::error!("Request failed: {} {}", req_parts.method(), req_parts.uri());
                    log::debug!("Error details: {:?}", err);

                    let app_error: AppError = err.into();

                    Ok(ServiceResponse::new(
                        req_parts,
                        app_error.error_response().map_into_boxed_body(),
                    ))
                }
            }
        })
    }
}

pub fn error_handler() -> ErrorHandlerMiddleware {
    ErrorHandlerMiddleware
}
