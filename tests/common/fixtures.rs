use serde_json::{json, Value};

/// A complete resume with a two-column layout
pub fn sample_resume() -> Value {
    json!({
        "basics": {
            "name": "Ada Lovelace",
            "headline": "Analyst & Metaphysician",
            "photo": {
                "visible": true,
                "url": "https://example.com/ada.png",
                "filters": { "size": 128, "shape": "rounded", "grayscale": false, "border": true }
            },
            "email": "ada@example.com",
            "phone": "+44 20 7946 0000",
            "website": "ada.dev",
            "birthdate": "1815-12-10",
            "summary": "Wrote the **first** published algorithm.",
            "location": {
                "address": "",
                "city": "London",
                "region": "",
                "postalCode": "",
                "country": "United Kingdom"
            },
            "profiles": [
                { "id": "gh", "network": "GitHub", "username": "ada", "url": "github.com/ada" },
                { "id": "ln", "network": "LinkedIn", "username": "ada-lovelace", "url": "" }
            ]
        },
        "sections": {
            "work": {
                "id": "work",
                "name": "Work Experience",
                "visible": true,
                "columns": 1,
                "items": [
                    {
                        "id": "w1",
                        "name": "Analytical Engine",
                        "position": "Collaborator",
                        "date": { "start": "1842-01-01", "end": "1843-09-01" },
                        "url": "example.com/engine",
                        "summary": "Translated and annotated Menabrea's memoir."
                    },
                    {
                        "id": "w2",
                        "name": "Royal Society",
                        "position": "",
                        "date": { "start": "1844-03-01" },
                        "url": "",
                        "summary": ""
                    }
                ]
            },
            "education": {
                "id": "education",
                "name": "Education",
                "visible": true,
                "columns": 1,
                "items": [
                    {
                        "id": "e1",
                        "institution": "Private tutoring",
                        "degree": "",
                        "area": "Mathematics",
                        "score": "",
                        "date": { "start": "1829-01-01", "end": "1835-01-01" }
                    }
                ]
            },
            "skills": {
                "id": "skills",
                "name": "Skills",
                "visible": true,
                "columns": 2,
                "items": [
                    { "id": "s1", "name": "Mathematics", "level": "Expert", "levelNum": 10, "keywords": ["Calculus", "Logic"] },
                    { "id": "s2", "name": "Poetry", "level": "", "levelNum": 0, "keywords": [] },
                    { "id": "s3", "name": "Music", "level": "Intermediate", "levelNum": 7 }
                ]
            },
            "awards": {
                "id": "awards",
                "name": "Awards",
                "visible": false,
                "items": [ { "id": "a1", "title": "Honorary mention", "awarder": "Nobody" } ]
            },
            "interests": {
                "id": "interests",
                "name": "Interests",
                "visible": true,
                "items": []
            }
        },
        "metadata": {
            "template": "gengar",
            "layout": [
                [["work", "education", "awards"], ["skills", "interests"]]
            ],
            "date": { "format": "MMM YYYY" },
            "theme": { "background": "#ffffff", "text": "#000000", "primary": "#f44336" }
        }
    })
}

/// A resume with nothing but a name
pub fn bare_resume() -> Value {
    json!({ "basics": { "name": "Charles Babbage" } })
}

/// A small JSON template definition
pub fn minimal_template() -> Value {
    json!({
        "name": "minimal",
        "header": [
            { "name": "name", "path": "basics.name" },
            { "name": "location", "path": "basics.location", "formatter": "location" },
            { "name": "email", "path": "basics.email", "kind": "email" }
        ],
        "itemFields": [
            { "name": "title", "path": "name" }
        ],
        "sections": {
            "work": {
                "fields": [
                    { "name": "title", "path": "name" },
                    { "name": "position", "path": "position", "formatter": "upper" },
                    { "name": "date", "path": "date", "formatter": "date" }
                ],
                "emphasizedTitle": true
            },
            "skills": {
                "fields": [
                    { "name": "title", "path": "name" },
                    { "name": "level", "path": "levelNum", "kind": "magnitude" }
                ],
                "compact": true
            }
        }
    })
}
