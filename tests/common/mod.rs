// tests/common/mod.rs
//
// In-memory sources for loader/state tests.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use valtti_cms::config::options::SourceOptions;
use valtti_cms::error::FetchError;
use valtti_cms::net::Fetch;

pub const CONTENT: &str = "\
id,value
home.hero.title,Koti joka kestää
home.hero.bg,hero.jpg
about.text,\"<p>Rakennamme <b>kestäviä</b>, kauniita koteja.</p>\"
";

pub const PROJECTS: &str = "\
name,status,statusText,location,price,progress,image,link,marketingText,modelId
Koivula,construction,Rakenteilla,Tampere,289 000 €,45,koivula.jpg,koivula.html,,aalto
Mäntylä,marketing,Ennakkomarkkinointi,Nokia,\"310 000 €\",12,,,Varaa omasi,laine
Kuusela,sold,Myyty,Pirkkala,,100,kuusela.jpg,kuusela.html,,laine
";

pub const MODELS: &str = "\
id,title,size,shortDesc,description,mainImage,images,specs_room_sqm,specs_total_sqm,specs_bedrooms,specs_bathrooms
aalto,Aalto,120 m²,Valoisa perhekoti,<p>Aalto</p>,aalto.jpg,aalto1.jpg|aalto2.jpg,120,140,3,2
laine,Laine,95 m²,Kompakti,<p>Laine</p>,laine.jpg,,95,105,2,1
";

pub const DETAILS: &str = "\
id,category,label,value
koivula,Yleistä,Valmistuu,2026
koivula,,Tontti,Oma
koivula,Talotekniikka,Lämmitys,Maalämpö
mantyla,Yleistä,Valmistuu,2027
";

/// Serves canned documents by URL and records which URLs were asked for.
#[derive(Default)]
pub struct FakeFetch {
    docs: HashMap<String, Result<String, FetchError>>,
    pub seen: Mutex<Vec<String>>,
}

impl FakeFetch {
    pub fn ok(mut self, url: &str, body: &str) -> Self {
        self.docs.insert(url.to_string(), Ok(body.to_string()));
        self
    }

    pub fn status(mut self, url: &str, status: u16) -> Self {
        self.docs.insert(url.to_string(), Err(FetchError::Status { url: url.to_string(), status }));
        self
    }
}

impl Fetch for FakeFetch {
    fn get(&self, url: &str) -> Result<String, FetchError> {
        self.seen.lock().unwrap().push(url.to_string());
        self.docs
            .get(url)
            .cloned()
            .unwrap_or_else(|| Err(FetchError::transport(url, "connection refused")))
    }
}

pub fn sources(with_details: bool) -> SourceOptions {
    SourceOptions {
        content_url: "mem://content".into(),
        projects_url: "mem://projects".into(),
        models_url: "mem://models".into(),
        details_url: with_details.then(|| "mem://details".into()),
        ..SourceOptions::default()
    }
}

pub fn all_ok() -> FakeFetch {
    FakeFetch::default()
        .ok("mem://content", CONTENT)
        .ok("mem://projects", PROJECTS)
        .ok("mem://models", MODELS)
        .ok("mem://details", DETAILS)
}
