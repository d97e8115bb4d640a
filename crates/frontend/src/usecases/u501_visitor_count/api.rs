use std::cell::Cell;
use std::rc::Rc;

use contracts::usecases::u501_visitor_count::{
    parse_count_body, VisitorCountError, REQUEST_TIMEOUT_MS,
};
use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use web_sys::{AbortController, RequestMode};

/// One GET against the visitor count endpoint, aborted after
/// [`REQUEST_TIMEOUT_MS`].
pub async fn fetch_visitor_count(url: &str) -> Result<f64, VisitorCountError> {
    let controller = AbortController::new()
        .map_err(|e| VisitorCountError::Network(format!("AbortController: {:?}", e)))?;

    let timed_out = Rc::new(Cell::new(false));
    // Dropping the guard cancels the timer once the body has been read
    let _abort_guard = {
        let controller = controller.clone();
        let timed_out = Rc::clone(&timed_out);
        Timeout::new(REQUEST_TIMEOUT_MS, move || {
            timed_out.set(true);
            controller.abort();
        })
    };

    let signal = controller.signal();
    let response = Request::get(url)
        .header("Accept", "application/json")
        .mode(RequestMode::Cors)
        .abort_signal(Some(&signal))
        .send()
        .await
        .map_err(|e| request_error(e, &timed_out))?;

    if !response.ok() {
        return Err(VisitorCountError::Http(response.status()));
    }

    let body = response
        .text()
        .await
        .map_err(|e| request_error(e, &timed_out))?;

    parse_count_body(&body)
}

fn request_error(error: gloo_net::Error, timed_out: &Cell<bool>) -> VisitorCountError {
    if timed_out.get() {
        VisitorCountError::Timeout
    } else {
        VisitorCountError::Network(error.to_string())
    }
}
