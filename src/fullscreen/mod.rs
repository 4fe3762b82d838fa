//! Fullscreen presentation for the player container
//!
//! Hosts expose fullscreen through one of several vendor entry points. The
//! entry point is detected once when the controller is built and reused for
//! every toggle afterwards.

pub mod simulated;

pub use simulated::SimulatedFullscreenHost;

use crate::utils::error::Result;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Vendor fullscreen entry points, in detection order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FullscreenApi {
    /// `requestFullscreen` / `exitFullscreen`
    Standard,

    /// Firefox: `mozRequestFullScreen` / `mozCancelFullScreen`
    Moz,

    /// Chrome, Safari and Opera: `webkitRequestFullscreen` / `webkitExitFullscreen`
    Webkit,

    /// IE/Edge: `msRequestFullscreen` / `msExitFullscreen`
    Ms,
}

impl FullscreenApi {
    pub const DETECTION_ORDER: [FullscreenApi; 4] = [
        FullscreenApi::Standard,
        FullscreenApi::Moz,
        FullscreenApi::Webkit,
        FullscreenApi::Ms,
    ];

    /// Name of the request entry point
    pub fn request_method(self) -> &'static str {
        match self {
            FullscreenApi::Standard => "requestFullscreen",
            FullscreenApi::Moz => "mozRequestFullScreen",
            FullscreenApi::Webkit => "webkitRequestFullscreen",
            FullscreenApi::Ms => "msRequestFullscreen",
        }
    }

    /// Name of the exit entry point
    pub fn exit_method(self) -> &'static str {
        match self {
            FullscreenApi::Standard => "exitFullscreen",
            FullscreenApi::Moz => "mozCancelFullScreen",
            FullscreenApi::Webkit => "webkitExitFullscreen",
            FullscreenApi::Ms => "msExitFullscreen",
        }
    }
}

impl fmt::Display for FullscreenApi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FullscreenApi::Standard => "standard",
            FullscreenApi::Moz => "moz",
            FullscreenApi::Webkit => "webkit",
            FullscreenApi::Ms => "ms",
        };
        f.write_str(name)
    }
}

impl FromStr for FullscreenApi {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "standard" => Ok(FullscreenApi::Standard),
            "moz" => Ok(FullscreenApi::Moz),
            "webkit" => Ok(FullscreenApi::Webkit),
            "ms" => Ok(FullscreenApi::Ms),
            other => Err(format!("unknown fullscreen API '{}'", other)),
        }
    }
}

/// Host exposing fullscreen entry points
///
/// Requests target the player container; exits target the document.
pub trait FullscreenHost {
    /// Whether the container offers this request entry point
    fn supports_request(&self, api: FullscreenApi) -> bool;

    /// Whether the document offers this exit entry point
    fn supports_exit(&self, api: FullscreenApi) -> bool;

    /// Ask for fullscreen presentation of the player container
    fn request(&mut self, api: FullscreenApi) -> Result<()>;

    /// Leave fullscreen presentation
    fn exit(&mut self, api: FullscreenApi) -> Result<()>;
}

/// Fullscreen entry points resolved against a host
pub struct Fullscreen {
    host: Box<dyn FullscreenHost>,
    request_api: Option<FullscreenApi>,
    exit_api: Option<FullscreenApi>,
}

impl Fullscreen {
    /// Query the host once and bind to the first supported entry points
    pub fn resolve(host: Box<dyn FullscreenHost>) -> Self {
        let request_api = FullscreenApi::DETECTION_ORDER
            .into_iter()
            .find(|api| host.supports_request(*api));
        let exit_api = FullscreenApi::DETECTION_ORDER
            .into_iter()
            .find(|api| host.supports_exit(*api));

        match (request_api, exit_api) {
            (Some(request), Some(exit)) => {
                debug!("Fullscreen bound to {} / {}", request.request_method(), exit.exit_method())
            }
            _ => warn!(
                "Fullscreen partially unsupported (request: {:?}, exit: {:?})",
                request_api, exit_api
            ),
        }

        Self {
            host,
            request_api,
            exit_api,
        }
    }

    pub fn request_api(&self) -> Option<FullscreenApi> {
        self.request_api
    }

    pub fn exit_api(&self) -> Option<FullscreenApi> {
        self.exit_api
    }

    /// Request fullscreen; a no-op when no entry point was found
    pub fn request(&mut self) {
        let Some(api) = self.request_api else {
            debug!("No fullscreen request entry point, skipping");
            return;
        };
        if let Err(e) = self.host.request(api) {
            warn!("{} failed: {}", api.request_method(), e);
        }
    }

    /// Exit fullscreen; a no-op when no entry point was found
    pub fn exit(&mut self) {
        let Some(api) = self.exit_api else {
            debug!("No fullscreen exit entry point, skipping");
            return;
        };
        if let Err(e) = self.host.exit(api) {
            warn!("{} failed: {}", api.exit_method(), e);
        }
    }

    /// Give the host back
    pub fn into_host(self) -> Box<dyn FullscreenHost> {
        self.host
    }
}
