use std::fmt;

/// One HoYoLAB login, as loaded from an `ACCOUNT*` variable or the cookie file.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    pub ltuid: String,
    pub ltoken: String,
    pub ltmid: Option<String>,
    /// Name of the variable or file entry this credential came from
    pub source: String,
}

impl Credential {
    pub fn new(
        ltuid: impl Into<String>,
        ltoken: impl Into<String>,
        ltmid: Option<String>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            ltuid: ltuid.into(),
            ltoken: ltoken.into(),
            ltmid: ltmid.filter(|m| !m.is_empty()),
            source: source.into(),
        }
    }

    /// Value for the `Cookie` header. `v2` tokens need the `_v2` cookie names.
    pub fn cookie_header(&self) -> String {
        if self.ltoken.starts_with("v2") {
            let mut cookie = format!("ltuid_v2={}; ltoken_v2={}", self.ltuid, self.ltoken);
            if let Some(ltmid) = &self.ltmid {
                cookie.push_str(&format!("; ltmid_v2={ltmid}"));
            }
            cookie
        } else {
            format!("ltuid={}; ltoken={}", self.ltuid, self.ltoken)
        }
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("ltuid", &self.ltuid)
            .field("ltoken", &"<redacted>")
            .field("ltmid", &self.ltmid)
            .field("source", &self.source)
            .finish()
    }
}
