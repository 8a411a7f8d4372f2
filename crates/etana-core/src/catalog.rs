//! Static catalog data: the services on offer and the company profile.
//!
//! Defined once at compile time and never changed at runtime. The catalog
//! endpoints are pure functions of this data and never touch the store.

use serde::Serialize;

// ─── Services ────────────────────────────────────────────────────────────────

/// One entry of the services catalog.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceEntry {
  pub id:          &'static str,
  pub name:        &'static str,
  pub description: &'static str,
  pub features:    [&'static str; 3],
}

/// The fixed, ordered services catalog.
pub static SERVICES: [ServiceEntry; 6] = [
  ServiceEntry {
    id:          "furniture",
    name:        "Furniture",
    description: "Custom and modern furniture solutions for homes and offices",
    features:    ["Custom Design", "Quality Materials", "Expert Installation"],
  },
  ServiceEntry {
    id:          "curtains",
    name:        "Curtains",
    description: "Elegant curtains and window treatments for every space",
    features:    [
      "Custom Fitting",
      "Premium Fabrics",
      "Professional Installation",
    ],
  },
  ServiceEntry {
    id:          "carpets",
    name:        "Carpets & Rugs",
    description: "Premium carpets and rugs to enhance your floor aesthetics",
    features:    ["Quality Materials", "Various Designs", "Professional Laying"],
  },
  ServiceEntry {
    id:          "wallpapers",
    name:        "Wallpapers",
    description: "Stunning wallpaper designs to transform your walls",
    features:    ["Modern Designs", "Quality Materials", "Expert Installation"],
  },
  ServiceEntry {
    id:          "fabric",
    name:        "Fabric & Upholstery",
    description: "Quality fabrics and upholstery services for furniture",
    features:    ["Premium Fabrics", "Custom Designs", "Professional Service"],
  },
  ServiceEntry {
    id:          "complete",
    name:        "Complete Decor",
    description: "Full home and office decoration and branding solutions",
    features:    ["Complete Design", "Project Management", "Turnkey Solutions"],
  },
];

// ─── Company profile ─────────────────────────────────────────────────────────

/// The fixed company descriptor served by the `/company` endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct CompanyProfile {
  pub name:        &'static str,
  pub description: &'static str,
  pub email:       &'static str,
  pub phone:       &'static str,
  pub instagram:   &'static str,
  pub location:    &'static str,
  pub established: &'static str,
  pub specialties: [&'static str; 7],
}

pub static COMPANY: CompanyProfile = CompanyProfile {
  name:        "Etana Interiors",
  description: "Your premier interior design partner in Kenya",
  email:       "sales@etanainteriors.co.ke",
  phone:       "+254700188923",
  instagram:   "https://www.instagram.com/etanainteriors",
  location:    "Nairobi, Kenya",
  established: "2020",
  specialties: [
    "Furniture Design",
    "Curtains & Window Treatments",
    "Carpets & Rugs",
    "Wallpapers",
    "Fabric & Upholstery",
    "Complete Home Decor",
    "Office Branding",
  ],
};
