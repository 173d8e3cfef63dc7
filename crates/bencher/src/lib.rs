#[derive(Debug, Copy, Clone)]
pub struct TestCase {
    name: &'static str,
    group: TestGroup,
    url: TestUrl,
}

impl TestCase {
    pub fn new(name: &'static str, group: TestGroup, url: TestUrl) -> Self {
        Self { name, group, url }
    }

    pub fn small(name: &'static str, url: TestUrl) -> Self {
        Self::new(name, TestGroup::Small, url)
    }

    pub fn normal(name: &'static str, url: TestUrl) -> Self {
        Self::new(name, TestGroup::Normal, url)
    }

    pub fn large(name: &'static str, url: TestUrl) -> Self {
        Self::new(name, TestGroup::Large, url)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn group(&self) -> TestGroup {
        self.group
    }

    pub fn url(&self) -> &TestUrl {
        &self.url
    }

    pub fn raw_url(&self) -> &'static str {
        self.url().raw()
    }
}

/// A url fixture and the token sent along with it
#[derive(Debug, Copy, Clone)]
pub struct TestUrl {
    raw: &'static str,
    auth_token: &'static str,
}

impl TestUrl {
    pub const fn new(raw: &'static str) -> Self {
        Self { raw, auth_token: "" }
    }

    pub const fn with_token(raw: &'static str, auth_token: &'static str) -> Self {
        Self { raw, auth_token }
    }

    pub fn raw(&self) -> &'static str {
        self.raw
    }

    pub fn auth_token(&self) -> &'static str {
        self.auth_token
    }
}

#[derive(Clone, Copy, Debug)]
pub enum TestGroup {
    Small,
    Normal,
    Large,
}
