//! Static station metadata served by `GET /station`.

// self
use crate::_prelude::*;

/// Radio station description; serialized with camelCase keys.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Station {
	/// Display name.
	pub name: String,
	/// Live audio stream.
	pub stream_url: String,
	/// Fallback artwork file name.
	pub image: String,
	/// Tagline.
	pub short_desc: String,
	/// Longer description.
	pub long_desc: String,
	/// Station website.
	pub website_url: String,
	/// Donation page.
	pub donation_url: String,
}
impl Station {
	/// Maxi 80 metadata.
	pub fn maxi80() -> Self {
		Self {
			name: "Maxi 80".into(),
			stream_url: "https://audio1.maxi80.com".into(),
			image: "maxi80_nocover-b.png".into(),
			short_desc: "La radio de toute une génération".into(),
			long_desc: "Le meilleur de la musique des années 80".into(),
			website_url: "https://maxi80.com".into(),
			donation_url: "https://www.maxi80.com/paypal.htm".into(),
		}
	}
}
