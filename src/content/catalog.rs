//! The language catalog — three descriptive cards, fixed order.
//!
//! Code samples are literal text, rendered verbatim by the UI.

use super::Language;

pub fn languages() -> Vec<Language> {
    vec![
        Language {
            name: "JavaScript",
            description: "A versatile language that powers the modern web. JavaScript is \
                          essential for creating interactive websites and can now be used for \
                          both frontend and backend development through Node.js.",
            advantages: vec![
                "Runs in every browser",
                "Large ecosystem of libraries",
                "Full-stack development capability",
                "Active community support",
                "Rich frameworks like React, Vue, and Angular",
            ],
            use_cases: vec![
                "Web Applications",
                "Server-side Applications",
                "Mobile Development",
                "Desktop Applications",
                "Browser Extensions",
            ],
            code_example: r#"// Modern JavaScript Features
// 1. Async/Await
async function fetchUserData() {
  try {
    const response = await fetch('/api/user');
    const data = await response.json();
    return data;
  } catch (error) {
    console.error('Error:', error);
  }
}

// 2. Class Implementation
class UserManager {
  constructor() {
    this.users = new Map();
  }

  addUser(id, name) {
    this.users.set(id, { name, createdAt: new Date() });
  }

  getUser(id) {
    return this.users.get(id);
  }
}"#,
        },
        Language {
            name: "Python",
            description: "Known for its simplicity and readability, Python has become one of \
                          the most popular programming languages, especially in data science \
                          and machine learning.",
            advantages: vec![
                "Easy to learn and read",
                "Extensive standard library",
                "Strong scientific computing libraries",
                "Cross-platform compatibility",
                "Versatile application domains",
            ],
            use_cases: vec![
                "Data Science",
                "Machine Learning",
                "Web Development",
                "Automation",
                "Scientific Computing",
            ],
            code_example: r#"# Python Modern Practices
import dataclasses
from typing import List, Optional

@dataclasses.dataclass
class Student:
    name: str
    age: int
    grades: List[float]
    address: Optional[str] = None

    def calculate_average(self) -> float:
        return sum(self.grades) / len(self.grades)

    @property
    def is_passing(self) -> bool:
        return self.calculate_average() >= 60.0

# Using Type Hints and Context Managers
def process_student_data(filename: str) -> List[Student]:
    students = []
    with open(filename, 'r') as file:
        for line in file:
            name, age, *grades = line.strip().split(',')
            students.append(Student(
                name=name,
                age=int(age),
                grades=[float(g) for g in grades]
            ))
    return students"#,
        },
        Language {
            name: "Java",
            description: "A strongly-typed, object-oriented programming language known for \
                          its reliability and scalability. Popular in enterprise applications \
                          and Android development.",
            advantages: vec![
                "Platform independence",
                "Strong type system",
                "Excellent tooling",
                "Enterprise-ready",
                "Large developer community",
            ],
            use_cases: vec![
                "Enterprise Applications",
                "Android Development",
                "Cloud Applications",
                "Microservices",
                "Big Data Processing",
            ],
            code_example: r#"// Modern Java Features
import java.util.List;
import java.util.stream.Collectors;

public class ModernJavaExample {
    record Person(String name, int age) {}  // Record class

    public List<String> processNames(List<Person> people) {
        return people.stream()
            .filter(person -> person.age() >= 18)
            .map(Person::name)
            .map(String::toUpperCase)
            .collect(Collectors.toList());
    }

    public void demonstratePatternMatching(Object obj) {
        if (obj instanceof String str) {  // Pattern matching
            System.out.println(str.toUpperCase());
        }
    }

    public String switchExpression(String day) {
        return switch (day) {  // Switch expression
            case "MONDAY", "FRIDAY" -> "Working day";
            case "SATURDAY", "SUNDAY" -> "Weekend";
            default -> "Unknown day";
        };
    }
}"#,
        },
    ]
}
