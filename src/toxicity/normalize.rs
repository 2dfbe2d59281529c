// Unicode punctuation normalization.
//
// Maps typographic punctuation variants (curly quotes, CJK brackets and
// quotes, full-width forms) to one canonical ASCII form, so that a phrase
// list written with plain punctuation still matches text that uses the
// fancy variants. The substitution table is the Moses-style one used by
// translation-corpus cleaning pipelines; it is fixed and the rewrite is
// idempotent.

/// Replace typographic punctuation variants with their canonical ASCII form.
///
/// The ideographic and full-width full stops (`。`, `．`) map to `". "` with
/// any immediately following spaces absorbed, matching the Moses table.
pub fn replace_unicode_punct(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '，' | '、' => out.push(','),
            '。' | '．' => {
                out.push_str(". ");
                while chars.peek() == Some(&' ') {
                    chars.next();
                }
            }
            '”' | '“' | '《' | '》' | '「' | '」' => out.push('"'),
            '∶' | '：' => out.push(':'),
            '？' => out.push('?'),
            '！' => out.push('!'),
            '（' => out.push('('),
            '）' => out.push(')'),
            '；' => out.push(';'),
            '～' => out.push('~'),
            '’' => out.push('\''),
            '…' => out.push_str("..."),
            '━' => out.push('-'),
            '〈' => out.push('<'),
            '〉' => out.push('>'),
            '【' => out.push('['),
            '】' => out.push(']'),
            '％' => out.push('%'),
            // Full-width digits 0-9
            '０'..='９' => {
                let digit = (c as u32 - '０' as u32) as u8;
                out.push((b'0' + digit) as char);
            }
            _ => out.push(c),
        }
    }

    out
}
