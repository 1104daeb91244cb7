/// Derive the source key for a member identifier.
///
/// Case transitions become `_` separators and the result is lowercase.
/// Uppercase runs are kept together as an acronym, so `HTTPServer` maps to
/// `http_server` rather than `h_t_t_p_server`. Spaces and hyphens become `_`.
pub fn derive_key(ident: &str) -> String {
	let chars: Vec<char> = ident.chars().collect();
	let mut out = String::with_capacity(ident.len() + 4);

	for (idx, &ch) in chars.iter().enumerate() {
		if matches!(ch, ' ' | '-' | '_') {
			out.push('_');
			continue;
		}

		if ch.is_uppercase() {
			let prev_upper = idx > 0 && chars[idx - 1].is_uppercase();
			let next_lower = chars.get(idx + 1).is_some_and(|next| next.is_lowercase());
			// last letter of an acronym starts the following word
			let starts_word = !prev_upper || next_lower;
			if starts_word && !out.is_empty() && !out.ends_with('_') {
				out.push('_');
			}
		}

		out.extend(ch.to_lowercase());
	}

	out
}

/// Parsed member metadata: `"key"`, `"key,required"` or `",required"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MemberTag<'a> {
	/// Explicit source key; `None` means derive from the identifier.
	pub key: Option<&'a str>,
	/// Absence of the key is a hard error.
	pub required: bool,
}

impl<'a> MemberTag<'a> {
	/// Parse tag text; unknown options are ignored.
	pub fn parse(tag: &'a str) -> Self {
		let mut parts = tag.split(',');
		let key = parts.next().filter(|key| !key.is_empty());
		let required = parts.any(|option| option.trim() == "required");
		Self { key, required }
	}
}
