//! Inbound requests and queries.
//!
//! These represent actions and conditions the home-automation controller
//! (or the serial console standing in for it) asks of the
//! [`OutputCoordinator`](super::coordinator::OutputCoordinator).  Requests
//! arrive by name, optionally with a value, exactly as the controller
//! registers them.

use core::fmt;

use super::channel::ChannelId;

/// State-changing commands that external adapters can send into the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Request {
    /// Set both channels to the same value (`set-aggregate`, `set-on-all`, `set-off-all`).
    SetAggregate(bool),

    /// Flip one channel (`toggle-channel-N`).
    ToggleChannel(ChannelId),

    /// Set one channel (`set-on-channel-N`, `set-off-channel-N`, `set-channel-N <v>`).
    SetChannel(ChannelId, bool),

    /// Drive the status LED directly; only honoured when it does not follow the outputs.
    SetLed(bool),
}

/// Read-only conditions, each answered with a boolean.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Query {
    /// `get-aggregate`
    Aggregate,
    /// `get-channel-N-on`
    ChannelOn(ChannelId),
    /// `get-channel-N-off`
    ChannelOff(ChannelId),
}

/// Anything the control loop can be asked from outside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inbound {
    Request(Request),
    Query(Query),
}

/// Why an inbound name/value pair was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestError {
    /// Name does not match any registered action or condition.
    UnknownName,
    /// The action takes a value and none was supplied.
    MissingValue,
    /// The value is not a recognisable boolean.
    InvalidValue,
    /// The name refers to a channel the module does not have.
    UnknownChannel(u8),
    /// The line exceeds the console limit.
    LineTooLong,
    /// Words follow the value.
    TrailingInput,
    /// The line is not valid UTF-8.
    NotText,
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownName => write!(f, "unknown request"),
            Self::MissingValue => write!(f, "missing value"),
            Self::InvalidValue => write!(f, "invalid value"),
            Self::UnknownChannel(n) => write!(f, "no channel {n}"),
            Self::LineTooLong => write!(f, "line too long"),
            Self::TrailingInput => write!(f, "unexpected input after value"),
            Self::NotText => write!(f, "not valid UTF-8"),
        }
    }
}

impl Inbound {
    /// Resolve a request or query by its registered name.
    ///
    /// `value` is only consulted by the actions that carry one.
    pub fn parse(name: &str, value: Option<&str>) -> Result<Self, RequestError> {
        let name = name.trim();
        let required = || value.ok_or(RequestError::MissingValue).and_then(parse_bool);

        match name {
            "set-aggregate" => return Ok(Self::Request(Request::SetAggregate(required()?))),
            "set-on-all" => return Ok(Self::Request(Request::SetAggregate(true))),
            "set-off-all" => return Ok(Self::Request(Request::SetAggregate(false))),
            "set-led" => return Ok(Self::Request(Request::SetLed(required()?))),
            "get-aggregate" => return Ok(Self::Query(Query::Aggregate)),
            _ => {}
        }

        if let Some(n) = name.strip_prefix("toggle-channel-") {
            return Ok(Self::Request(Request::ToggleChannel(channel(n)?)));
        }
        if let Some(n) = name.strip_prefix("set-on-channel-") {
            return Ok(Self::Request(Request::SetChannel(channel(n)?, true)));
        }
        if let Some(n) = name.strip_prefix("set-off-channel-") {
            return Ok(Self::Request(Request::SetChannel(channel(n)?, false)));
        }
        if let Some(n) = name.strip_prefix("set-channel-") {
            let id = channel(n)?;
            return Ok(Self::Request(Request::SetChannel(id, required()?)));
        }
        if let Some(rest) = name.strip_prefix("get-channel-") {
            if let Some(n) = rest.strip_suffix("-on") {
                return Ok(Self::Query(Query::ChannelOn(channel(n)?)));
            }
            if let Some(n) = rest.strip_suffix("-off") {
                return Ok(Self::Query(Query::ChannelOff(channel(n)?)));
            }
        }

        Err(RequestError::UnknownName)
    }
}

impl Query {
    /// Registered condition name, used when answering on the console.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Aggregate => "get-aggregate",
            Self::ChannelOn(ChannelId::One) => "get-channel-1-on",
            Self::ChannelOn(ChannelId::Two) => "get-channel-2-on",
            Self::ChannelOff(ChannelId::One) => "get-channel-1-off",
            Self::ChannelOff(ChannelId::Two) => "get-channel-2-off",
        }
    }
}

fn channel(digits: &str) -> Result<ChannelId, RequestError> {
    let n: u8 = digits.parse().map_err(|_| RequestError::UnknownName)?;
    ChannelId::from_index(n).ok_or(RequestError::UnknownChannel(n))
}

/// Parse a controller-supplied boolean.
///
/// Accepts `true`/`false` and `on`/`off` (any case); any other integer
/// follows the "non-zero is on" rule the controller's numeric values use.
pub fn parse_bool(raw: &str) -> Result<bool, RequestError> {
    let raw = raw.trim();
    if raw.eq_ignore_ascii_case("true") || raw.eq_ignore_ascii_case("on") {
        return Ok(true);
    }
    if raw.eq_ignore_ascii_case("false") || raw.eq_ignore_ascii_case("off") {
        return Ok(false);
    }
    raw.parse::<i32>()
        .map(|n| n != 0)
        .map_err(|_| RequestError::InvalidValue)
}
