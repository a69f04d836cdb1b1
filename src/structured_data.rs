use {super::*, serde_json::{Value, json}};

const SCHEMA_CONTEXT: &str = "https://schema.org";

/// A schema.org `FAQPage` for the records, or `None` when there are none.
pub fn faq_page_json_ld(faqs: &[FaqRecord]) -> Option<Value> {
  if faqs.is_empty() {
    return None;
  }

  let questions = faqs
    .iter()
    .map(|faq| {
      json!({
        "@type": "Question",
        "name": faq.question,
        "acceptedAnswer": {
          "@type": "Answer",
          "text": faq.answer,
        },
      })
    })
    .collect::<Vec<_>>();

  Some(json!({
    "@context": SCHEMA_CONTEXT,
    "@type": "FAQPage",
    "mainEntity": questions,
  }))
}

/// One schema.org `VideoObject` per video. Empty thumbnails and unknown
/// upload dates are left out.
pub fn video_objects_json_ld(videos: &[VideoDescriptor]) -> Vec<Value> {
  videos
    .iter()
    .map(|video| {
      let mut object = json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "VideoObject",
        "name": video.name,
        "description": video.description,
        "contentUrl": video.url,
        "embedUrl": video.embed_url,
      });

      if !video.thumbnail_url.is_empty() {
        object["thumbnailUrl"] = json!(video.thumbnail_url);
      }

      if let Some(date) = &video.upload_date {
        object["uploadDate"] = json!(date);
      }

      object
    })
    .collect()
}
