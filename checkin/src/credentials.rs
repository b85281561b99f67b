use hoyolab::Credential;
use log::{info, warn};
use std::env;
use std::fs;
use std::io;
use std::path::Path;
use toml::{Table, Value};

const ENV_PREFIX: &str = "ACCOUNT";

/// Parses `ltuid, ltoken[, ltmid]`. Any other field count is rejected.
pub(crate) fn parse_cookie(value: &str, source: &str) -> Option<Credential> {
    let fields: Vec<&str> = value.split(',').map(str::trim).collect();
    match fields.as_slice() {
        [ltuid, ltoken] => Some(Credential::new(*ltuid, *ltoken, None, source)),
        [ltuid, ltoken, ltmid] => Some(Credential::new(
            *ltuid,
            *ltoken,
            Some(ltmid.to_string()),
            source,
        )),
        _ => None,
    }
}

/// Credentials from every `ACCOUNT*` variable; malformed values are skipped.
pub(crate) fn from_vars<I>(vars: I) -> Vec<Credential>
where
    I: IntoIterator<Item = (String, String)>,
{
    vars.into_iter()
        .filter(|(name, _)| name.starts_with(ENV_PREFIX))
        .filter_map(|(name, value)| parse_cookie(&value, &name))
        .collect()
}

/// Credentials from the cookie file. A missing file is fine; an unreadable or
/// malformed one is logged and contributes nothing.
pub(crate) fn from_file(path: &Path) -> Vec<Credential> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Vec::new(),
        Err(e) => {
            warn!("Failed to read {}: {e}", path.display());
            return Vec::new();
        }
    };

    match from_toml(&content) {
        Ok(credentials) => {
            info!("Loaded {} account(s) from {}", credentials.len(), path.display());
            credentials
        }
        Err(e) => {
            warn!("Failed to parse {}: {e}", path.display());
            Vec::new()
        }
    }
}

/// Each top-level key names one account. The value is either the same comma
/// separated string as the environment variables or a table with `ltuid`,
/// `ltoken` and optionally `ltmid`.
fn from_toml(content: &str) -> Result<Vec<Credential>, toml::de::Error> {
    let table: Table = content.parse()?;
    Ok(table
        .iter()
        .filter_map(|(source, value)| match value {
            Value::String(cookie) => parse_cookie(cookie, source),
            Value::Table(fields) => from_fields(fields, source),
            _ => {
                warn!("{source}: expected a string or a table, skipping");
                None
            }
        })
        .collect())
}

fn from_fields(fields: &Table, source: &str) -> Option<Credential> {
    let field = |key: &str| match fields.get(key)? {
        Value::String(s) => Some(s.trim().to_string()),
        Value::Integer(i) => Some(i.to_string()),
        _ => None,
    };

    match (field("ltuid"), field("ltoken")) {
        (Some(ltuid), Some(ltoken)) => Some(Credential::new(ltuid, ltoken, field("ltmid"), source)),
        _ => {
            warn!("{source}: ltuid and ltoken are required, skipping");
            None
        }
    }
}

/// Everything from the environment and the cookie file, sorted by source name.
/// Duplicates are kept.
pub(crate) fn load(cookie_file: &Path) -> Vec<Credential> {
    let vars = env::vars_os()
        .filter_map(|(name, value)| Some((name.into_string().ok()?, value.into_string().ok()?)));
    merge(vars, cookie_file)
}

/// Variables first, then the file; the stable sort keeps that order between
/// entries sharing a source name.
fn merge<I>(vars: I, cookie_file: &Path) -> Vec<Credential>
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut credentials = from_vars(vars);
    credentials.extend(from_file(cookie_file));
    credentials.sort_by(|a, b| a.source.cmp(&b.source));
    credentials
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parses_two_and_three_field_cookies() {
        let two = parse_cookie("123, v2_token", "ACCOUNT1").unwrap();
        assert_eq!(two.ltuid, "123");
        assert_eq!(two.ltoken, "v2_token");
        assert_eq!(two.ltmid, None);
        assert_eq!(two.source, "ACCOUNT1");

        let three = parse_cookie("123,v2_token,mid", "ACCOUNT2").unwrap();
        assert_eq!(three.ltmid.as_deref(), Some("mid"));
    }

    #[test]
    fn rejects_wrong_field_counts() {
        for value in ["", "123", "1,2,3,4", "1,2,3,4,5"] {
            assert!(parse_cookie(value, "ACCOUNT").is_none(), "{value:?}");
        }
    }

    #[test]
    fn only_prefixed_variables_are_read() {
        let vars = [
            ("ACCOUNT1", "1,a"),
            ("ACCOUNT_BAD", "nope"),
            ("SERVER", "ko-kr"),
            ("MY_ACCOUNT", "2,b"),
        ]
        .map(|(k, v)| (k.to_string(), v.to_string()));

        let credentials = from_vars(vars);

        assert_eq!(credentials.len(), 1);
        assert_eq!(credentials[0].source, "ACCOUNT1");
    }

    #[test]
    fn reads_strings_and_tables_from_toml() {
        let content = r#"
            main = "1, v2_a, mid"
            broken = "just-one-field"
            number = 5

            [alt]
            ltuid = 2
            ltoken = "v2_b"

            [incomplete]
            ltuid = "3"
        "#;

        let mut credentials = from_toml(content).unwrap();
        credentials.sort_by(|a, b| a.source.cmp(&b.source));

        let sources: Vec<&str> = credentials.iter().map(|c| c.source.as_str()).collect();
        assert_eq!(sources, ["alt", "main"]);
        assert_eq!(credentials[0].ltuid, "2");
        assert_eq!(credentials[1].ltmid.as_deref(), Some("mid"));
    }

    #[test]
    fn missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(from_file(&dir.path().join("cookie.toml")).is_empty());
    }

    #[test]
    fn malformed_file_is_ignored() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "this is = = not toml").unwrap();
        assert!(from_file(file.path()).is_empty());
    }

    #[test]
    fn valid_file_is_loaded() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, r#"ACCOUNT_FILE = "9, v2_z""#).unwrap();
        let credentials = from_file(file.path());
        assert_eq!(credentials.len(), 1);
        assert_eq!(credentials[0].source, "ACCOUNT_FILE");
    }

    #[test]
    fn environment_and_file_are_merged_by_source() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, r#"ACCOUNT_Z = "3, c""#).unwrap();
        writeln!(file, r#"ACCOUNT_A = "4, d""#).unwrap();
        let vars = [("ACCOUNT_Z", "1,a"), ("ACCOUNT_B", "2,b")]
            .map(|(k, v)| (k.to_string(), v.to_string()));

        let credentials = merge(vars, file.path());

        let merged: Vec<(&str, &str)> = credentials
            .iter()
            .map(|c| (c.source.as_str(), c.ltuid.as_str()))
            .collect();
        assert_eq!(
            merged,
            [
                ("ACCOUNT_A", "4"),
                ("ACCOUNT_B", "2"),
                ("ACCOUNT_Z", "1"),
                ("ACCOUNT_Z", "3"),
            ]
        );
    }
}
