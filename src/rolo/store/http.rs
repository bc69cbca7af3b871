use async_trait::async_trait;
use log::{debug, warn};
use reqwest::{Client, Response, StatusCode};
use url::Url;

use super::Remote;
use crate::error::{Result, RoloError};
use crate::model::{Contact, ContactId, ContactValues};

/// Client of the remote contacts resource.
pub struct HttpRemote {
    base_url: Url,
    client: Client,
}

impl HttpRemote {
    pub fn new(base_url: &str) -> Result<Self> {
        // A trailing slash keeps Url::join from eating the last path segment.
        let mut base = base_url.to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        Ok(Self {
            base_url: Url::parse(&base)?,
            client: Client::new(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn collection_url(&self) -> Result<Url> {
        Ok(self.base_url.join("contacts")?)
    }

    fn record_url(&self, id: &ContactId) -> Result<Url> {
        Ok(self.base_url.join(&format!("contacts/{}", id))?)
    }

    fn check(response: Response, id: Option<&ContactId>) -> Result<Response> {
        if response.status() == StatusCode::NOT_FOUND {
            if let Some(id) = id {
                return Err(RoloError::NotFound(id.clone()));
            }
        }
        response.error_for_status().map_err(|err| {
            warn!("remote call failed: {}", err);
            err.into()
        })
    }
}

#[async_trait]
impl Remote for HttpRemote {
    async fn fetch_all(&self) -> Result<Vec<Contact>> {
        let url = self.collection_url()?;
        debug!("GET {}", url);
        let response = self.client.get(url).send().await?;
        Ok(Self::check(response, None)?.json().await?)
    }

    async fn fetch(&self, id: &ContactId) -> Result<Contact> {
        let url = self.record_url(id)?;
        debug!("GET {}", url);
        let response = self.client.get(url).send().await?;
        Ok(Self::check(response, Some(id))?.json().await?)
    }

    async fn create(&mut self, values: &ContactValues) -> Result<Contact> {
        let url = self.collection_url()?;
        debug!("POST {}", url);
        let response = self.client.post(url).json(values).send().await?;
        Ok(Self::check(response, None)?.json().await?)
    }

    async fn update(&mut self, id: &ContactId, values: &ContactValues) -> Result<Contact> {
        let url = self.record_url(id)?;
        debug!("PUT {}", url);
        let response = self.client.put(url).json(values).send().await?;
        Ok(Self::check(response, Some(id))?.json().await?)
    }

    async fn delete(&mut self, id: &ContactId) -> Result<()> {
        let url = self.record_url(id)?;
        debug!("DELETE {}", url);
        let response = self.client.delete(url).send().await?;
        // Confirmation body ignored.
        Self::check(response, Some(id))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_collection_and_record_urls() {
        let remote = HttpRemote::new("http://localhost:3000").unwrap();
        assert_eq!(
            remote.collection_url().unwrap().as_str(),
            "http://localhost:3000/contacts"
        );
        assert_eq!(
            remote.record_url(&ContactId::new("42")).unwrap().as_str(),
            "http://localhost:3000/contacts/42"
        );
    }

    #[test]
    fn preserves_a_base_path_prefix() {
        let remote = HttpRemote::new("http://api.example.com/v1").unwrap();
        assert_eq!(
            remote.collection_url().unwrap().as_str(),
            "http://api.example.com/v1/contacts"
        );
    }

    #[test]
    fn rejects_an_unparsable_base_url() {
        assert!(HttpRemote::new("not a url").is_err());
    }
}
