//! LLM provider implementations.

mod anthropic;
mod openai;

pub use anthropic::AnthropicProvider;
pub use openai::OpenAiProvider;

/// Append a network chunk to `buffer` as text.
///
/// A multi-byte character cut at the end of `chunk` is held back in `pending`
/// until the next chunk completes it. Bytes that can never form valid UTF-8
/// become U+FFFD.
pub(crate) fn push_utf8(buffer: &mut String, pending: &mut Vec<u8>, chunk: &[u8]) {
    pending.extend_from_slice(chunk);

    let mut start = 0;
    loop {
        match std::str::from_utf8(&pending[start..]) {
            Ok(text) => {
                buffer.push_str(text);
                pending.clear();
                return;
            }
            Err(e) => {
                let valid = start + e.valid_up_to();
                buffer.push_str(&String::from_utf8_lossy(&pending[start..valid]));
                match e.error_len() {
                    Some(len) => {
                        buffer.push(char::REPLACEMENT_CHARACTER);
                        start = valid + len;
                    }
                    None => {
                        pending.drain(..valid);
                        return;
                    }
                }
            }
        }
    }
}

/// Split one server-sent event off the front of `buffer`.
///
/// Returns `None` when no complete event (terminated by a blank line) is
/// buffered yet. Otherwise returns the event's `data:` payload, if it had one,
/// and the remaining buffer content.
pub(crate) fn next_sse_data(buffer: &str) -> Option<(Option<String>, String)> {
    let normalized;
    let buffer = if buffer.contains('\r') {
        normalized = buffer.replace("\r\n", "\n");
        normalized.as_str()
    } else {
        buffer
    };

    let end = buffer.find("\n\n")?;
    let event_str = &buffer[..end];
    let remainder = buffer[end + 2..].to_string();

    let data = event_str
        .lines()
        .filter_map(|line| line.strip_prefix("data:"))
        .map(str::trim_start)
        .collect::<Vec<_>>();

    if data.is_empty() {
        return Some((None, remainder));
    }

    Some((Some(data.join("\n")), remainder))
}
